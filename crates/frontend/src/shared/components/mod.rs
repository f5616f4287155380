pub mod section_card;
