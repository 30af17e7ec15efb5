pub mod icons;
pub mod link_opener;
pub mod search_input;
pub mod theme;
