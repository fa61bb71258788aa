// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use corkboard_event_state::drag::DragConfig;
use corkboard_event_state::outside_click::OutsideClickConfig;
use corkboard_layout::{AutoPanConfig, FanConfig, RepulsionConfig};
use corkboard_view::{ViewportLimits, ViewportState, ZoomConfig};
use kurbo::Size;

/// Window size assumed until the host reports one.
pub const DEFAULT_WINDOW: Size = Size::new(1280.0, 800.0);

/// Every tunable of a [`Canvas`](crate::Canvas).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CanvasConfig {
    /// Stack fan-out geometry.
    pub fan: FanConfig,
    /// Push-away field around the expanded group.
    pub repulsion: RepulsionConfig,
    /// Click-vs-drag threshold.
    pub drag: DragConfig,
    /// Tap tolerance for outside clicks.
    pub outside_click: OutsideClickConfig,
    /// Zoom limits.
    pub limits: ViewportLimits,
    /// Wheel and button zoom behaviour.
    pub zoom: ZoomConfig,
    /// Auto-pan margin.
    pub auto_pan: AutoPanConfig,
    /// Transform at mount and after a view reset.
    pub initial_viewport: ViewportState,
    /// Window size in screen pixels.
    pub window: Size,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            fan: FanConfig::default(),
            repulsion: RepulsionConfig::default(),
            drag: DragConfig::default(),
            outside_click: OutsideClickConfig::default(),
            limits: ViewportLimits::DEFAULT,
            zoom: ZoomConfig::default(),
            auto_pan: AutoPanConfig::default(),
            initial_viewport: ViewportState::IDENTITY,
            window: DEFAULT_WINDOW,
        }
    }
}
