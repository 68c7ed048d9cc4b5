/// One rendered grid entry: an image reference plus a text label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    /// Id of the champion or item the card stands for.
    pub id: String,
    pub label: String,
    pub image_url: String,
    pub image_alt: String,
}
