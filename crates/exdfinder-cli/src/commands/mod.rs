pub mod highlight;
pub mod inspect;
