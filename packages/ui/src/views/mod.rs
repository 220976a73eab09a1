mod modal_overlay;
pub use modal_overlay::ModalOverlay;

mod edit_profile;
pub use edit_profile::EditProfileDialog;

mod profile;
pub use profile::ProfileView;
