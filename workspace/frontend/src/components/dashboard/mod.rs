mod data_section;
mod quick_add;
mod stat_card;
mod view;

pub use view::Dashboard;
