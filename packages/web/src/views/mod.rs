mod home;
pub use home::Home;

mod signup;
pub use signup::Signup;

mod login;
pub use login::Login;

mod profile;
pub use profile::Profile;

mod about;
pub use about::About;

mod navbar;
pub use navbar::Navbar;
