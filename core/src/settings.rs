use crate::meter::MeterThresholds;
use crate::particles::ParticleSettings;
use crate::timeline::TimelineStyle;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PresentationSettings {
    pub timeline: TimelineStyle,
    pub particles: ParticleSettings,
    pub meter: MeterThresholds,
}
