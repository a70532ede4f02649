//! One page component per archive view.

mod associations;
mod districts;
mod glossary;
mod intro;
mod personnel;

pub use associations::AssociationsView;
pub use districts::DistrictsView;
pub use glossary::GlossaryView;
pub use intro::IntroView;
pub use personnel::PersonnelView;
