pub mod app;
pub mod contact_form;
pub mod hero;
pub mod nav_bar;
pub mod project_card;
pub mod reveal_section;
pub mod tech_stack;
pub mod theme_toggle;
