pub mod activity_card;
pub mod banner;
pub mod signup_form;
pub mod toolbar;

pub use activity_card::ActivitiesList;
pub use banner::Banner;
pub use signup_form::SignupForm;
pub use toolbar::Toolbar;
