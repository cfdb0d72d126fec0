//! Ad templates: placeholder resolution and the on-disk template library.

pub mod context;
pub mod discovery;
pub mod placeholder;
pub mod repository;
pub mod resolver;

pub use context::{CustomVars, VariableContext};
pub use placeholder::{CampaignField, LocationField, Placeholder};
pub use resolver::{Resolver, UnresolvedCustom, placeholders, resolve};
