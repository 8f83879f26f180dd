use crate::{
    animation::{motion::BouncingMotion, timeline::Timeline},
    core::{
        config::BouncingOptions,
        constants::MARKER_ICON_SIZE,
        geo::{Point, Size},
    },
    BounceError, Result,
};
use std::{num::NonZeroU32, sync::Arc};

const DEFAULT_ICON_HEIGHT: NonZeroU32 = match NonZeroU32::new(MARKER_ICON_SIZE.1) {
    Some(height) => height,
    None => panic!("default marker icon height must be non-zero"),
};

/// A marker able to bounce.
///
/// Holds the pixel geometry of the rendered icon (and optional shadow) and
/// keeps its [`BouncingMotion`] in sync with its options and position.
/// Timelines come from [`Timeline::global`] unless the marker is given its
/// own cache with [`BouncingMarker::with_timeline`].
#[derive(Debug, Clone)]
pub struct BouncingMarker {
    id: String,
    timeline: Option<Arc<Timeline>>,
    position: Point,
    icon_size: Size,
    icon_height: NonZeroU32,
    shadow_position: Option<Point>,
    options: BouncingOptions,
    motion: BouncingMotion,
}

impl BouncingMarker {
    pub fn new(id: String, position: Point) -> Self {
        let icon_size = Size::from(MARKER_ICON_SIZE);
        let icon_height = DEFAULT_ICON_HEIGHT;
        let options = BouncingOptions::default();
        let motion = BouncingMotion::calculate(&options, position, icon_height, None);

        Self {
            id,
            timeline: None,
            position,
            icon_size,
            icon_height,
            shadow_position: None,
            options,
            motion,
        }
    }

    pub fn with_icon_size(mut self, size: Size) -> Result<Self> {
        self.icon_height =
            NonZeroU32::new(size.height).ok_or(BounceError::InvalidIconHeight(size.height))?;
        self.icon_size = size;
        self.recalculate();
        Ok(self)
    }

    /// Uses `timeline` instead of the process-wide cache.
    pub fn with_timeline(mut self, timeline: Arc<Timeline>) -> Self {
        self.timeline = Some(timeline);
        self.recalculate();
        self
    }

    pub fn with_shadow(mut self, position: Point) -> Self {
        self.shadow_position = Some(position);
        self.recalculate();
        self
    }

    pub fn with_options(mut self, options: BouncingOptions) -> Result<Self> {
        options.validate()?;
        self.options = options;
        self.recalculate();
        Ok(self)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn position(&self) -> Point {
        self.position
    }

    /// Moves the marker; the motion is recalculated for the new position.
    pub fn set_position(&mut self, position: Point, shadow_position: Option<Point>) {
        self.position = position;
        self.shadow_position = shadow_position;
        self.recalculate();
    }

    pub fn icon_size(&self) -> Size {
        self.icon_size
    }

    pub fn shadow_position(&self) -> Option<Point> {
        self.shadow_position
    }

    pub fn bouncing_options(&self) -> &BouncingOptions {
        &self.options
    }

    /// Patches the options of this marker and recalculates its motion.
    pub fn set_bouncing_options(&mut self, patch: &serde_json::Value) -> Result<()> {
        self.options.merge(patch)?;
        self.recalculate();
        Ok(())
    }

    pub fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "id": self.id,
            "position": { "x": self.position.x, "y": self.position.y },
            "iconSize": { "width": self.icon_size.width, "height": self.icon_size.height },
            "bouncing": self.options,
        })
    }

    pub fn motion(&self) -> &BouncingMotion {
        &self.motion
    }

    fn recalculate(&mut self) {
        log::trace!("recalculating motion of marker {}", self.id);
        let timeline = match &self.timeline {
            Some(timeline) => timeline.as_ref(),
            None => Timeline::global(),
        };
        self.motion = BouncingMotion::calculate_with(
            timeline,
            &self.options,
            self.position,
            self.icon_height,
            self.shadow_position,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::timeline::MotionKind;
    use serde_json::json;

    #[test]
    fn test_marker_uses_default_options() {
        let marker = BouncingMarker::new("paris".to_string(), Point::new(100, 100));

        assert_eq!(marker.bouncing_options(), &BouncingOptions::default());
        assert_eq!(marker.icon_size(), Size::new(25, 41));
        assert_eq!(marker.motion().icon_move_points.len(), 16);
        assert!(marker.motion().shadow.is_none());
    }

    #[test]
    fn test_set_bouncing_options_recalculates() {
        let mut marker = BouncingMarker::new("paris".to_string(), Point::new(100, 100))
            .with_shadow(Point::new(100, 100));

        marker
            .set_bouncing_options(&json!({ "bounceHeight": 100, "exclusive": true }))
            .unwrap();

        assert_eq!(marker.bouncing_options().bounce_height, 100);
        assert!(marker.bouncing_options().exclusive);
        assert_eq!(marker.bouncing_options().contract_height, 12);
        assert_eq!(marker.motion().frame_count(), 200);
        assert_eq!(marker.motion().shadow.as_ref().unwrap().points.len(), 101);
    }

    #[test]
    fn test_zero_icon_height_is_rejected() {
        let result = BouncingMarker::new("m".to_string(), Point::default())
            .with_icon_size(Size::new(25, 0));
        assert!(matches!(result, Err(BounceError::InvalidIconHeight(0))));
    }

    #[test]
    fn test_resize_uses_icon_height() {
        let marker = BouncingMarker::new("m".to_string(), Point::new(0, 0))
            .with_icon_size(Size::new(20, 20))
            .unwrap();

        let resize = marker.motion().resize.as_ref().unwrap();
        assert_eq!(resize.transforms[10].scale_y(), 0.5);
    }

    #[test]
    fn test_marker_with_own_timeline() {
        let timeline = Arc::new(Timeline::new());
        let mut marker = BouncingMarker::new("m".to_string(), Point::new(0, 0))
            .with_timeline(Arc::clone(&timeline));

        // move and resize, steps and delays
        assert_eq!(timeline.len(), 4);
        assert!(Arc::ptr_eq(
            &marker.motion().move_steps,
            &timeline.steps(15, MotionKind::Move)
        ));

        marker.set_bouncing_options(&json!({ "bounceHeight": 7 })).unwrap();
        assert_eq!(timeline.len(), 6);
        assert_eq!(marker.motion().frame_count(), 14);
    }

    #[test]
    fn test_options_json() {
        let marker = BouncingMarker::new("m".to_string(), Point::new(1, 2));
        let options = marker.options();

        assert_eq!(options["position"]["y"], 2);
        assert_eq!(options["bouncing"]["bounceSpeed"], 52);
    }
}
