pub mod meter;
pub mod particles;
pub mod scene;
pub mod selection;
pub mod settings;
pub mod timeline;

pub use meter::{fill_percent, MeterStatus, MeterThresholds, METER_TICKS};
pub use particles::{EmberColor, Particle, ParticleField, ParticleSettings, Rng};
pub use scene::{IconKind, ParseSceneIdError, Rgb, Scene, SceneId, SceneStore, SCENES};
pub use selection::Selection;
pub use settings::PresentationSettings;
pub use timeline::{node_paint, NodePaint, TimelineLayout, TimelineStyle};
