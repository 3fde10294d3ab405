pub mod contact;
pub mod hero;
pub mod how_it_works;
pub mod navbar;
pub mod problem;
pub mod solution;

pub use contact::ContactSection;
pub use hero::HeroSection;
pub use how_it_works::HowItWorksSection;
pub use navbar::Navbar;
pub use problem::ProblemSection;
pub use solution::SolutionSection;
