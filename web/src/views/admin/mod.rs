//! Admin console views. Every view except the login form wraps itself in
//! [`ui::AdminGuard`], so each navigation into the console re-verifies the
//! stored credential.

mod shell;
pub(crate) use shell::AdminShell;

mod login;
pub use login::AdminLogin;

mod dashboard;
pub use dashboard::AdminDashboard;

mod sections;
pub use sections::AdminSections;

mod blog;
pub use blog::BlogManager;

mod blog_edit;
pub use blog_edit::BlogEditor;

mod newsletter;
pub use newsletter::AdminNewsletter;

mod messages;
pub use messages::AdminMessages;

mod files;
pub use files::AdminFiles;
