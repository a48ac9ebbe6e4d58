// Site routes

mod about;
mod demo;
mod home;

pub use about::AboutPage;
pub use demo::DemoPage;
pub use home::HomePage;
