pub mod card;
pub mod champion;
pub mod ids;
pub mod item;
