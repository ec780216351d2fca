use crate::config::ParallaxConfig;
use crate::easing::FrameTransition;
use crate::parallax::ParallaxFrame;
use crate::tilt::TiltVector;
use instant::Instant;

/// Parallax state for one banner: static config plus the eased frame that is
/// currently on screen.
#[derive(Clone, Debug)]
pub struct ParallaxView {
    config: ParallaxConfig,
    transition: FrameTransition,
}

impl ParallaxView {
    pub fn new(config: ParallaxConfig) -> Self {
        let transition = FrameTransition::new(ParallaxFrame::NEUTRAL, config.transition);
        Self { config, transition }
    }

    pub fn config(&self) -> &ParallaxConfig {
        &self.config
    }

    /// Feed a new tilt sample; the displayed frame eases towards it.
    pub fn set_tilt(&mut self, tilt: TiltVector, now: Instant) {
        let target = ParallaxFrame::compute(&self.config, &tilt);
        self.transition.retarget(target, now);
    }

    /// Frame the target is easing towards.
    pub fn target(&self) -> &ParallaxFrame {
        self.transition.target()
    }

    /// Frame to draw at `now`.
    pub fn frame(&self, now: Instant) -> ParallaxFrame {
        self.transition.sample(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.transition.is_settled(now)
    }
}
