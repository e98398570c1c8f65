use std::sync::Arc;

use crate::config::TickRate;
use crate::drawable::{DrawOption, Drawable, Visual};
use crate::target::RenderTarget;
use crate::tile_sheet::TileSheet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationState {
    Playing,
    /// A play-once animation parked on its last frame.
    HeldAtEnd,
}

/// A [`TileSheet`] whose tile follows a frame pattern over time.
///
/// Progress runs from 0 to 1 over `duration` seconds, advancing by a fixed
/// step per tick. The tile shown is the pattern entry at `progress * len`.
/// A looping animation jumps back to 0 once progress passes 1; a play-once
/// animation stops on the last pattern entry and reports completion from
/// every subsequent [`update`](Drawable::update).
#[derive(Debug)]
pub struct AnimatedTileSheet {
    sheet: TileSheet,
    pattern: Arc<[usize]>,
    progress: f32,
    step: f32,
    duration: f32,
    looping: bool,
    state: AnimationState,
}

impl AnimatedTileSheet {
    /// Builds an animation playing `pattern` over `duration` seconds.
    ///
    /// The per-tick step is fixed here from `tick_rate`; later changes to the
    /// process tick rate do not affect existing animations. The sheet's
    /// starting tile is replaced by `pattern[0]`, so clones restart there.
    ///
    /// # Errors
    /// Returns an error if `pattern` is empty, names a tile the sheet does not
    /// have, `duration` is not a positive finite number of seconds, or
    /// `duration` and `tick_rate` give a per-tick step that rounds to zero or
    /// overflows.
    pub fn new(
        sheet: TileSheet,
        pattern: Vec<usize>,
        duration: f32,
        looping: bool,
        tick_rate: TickRate,
    ) -> anyhow::Result<Self> {
        let Some(&first) = pattern.first() else {
            anyhow::bail!("animation pattern is empty");
        };
        if let Some(bad) = pattern.iter().find(|&&ix| ix >= sheet.tile_count()) {
            anyhow::bail!(
                "animation pattern references tile {} but the sheet has {} tiles",
                bad,
                sheet.tile_count()
            );
        }
        if !duration.is_finite() || duration <= 0.0 {
            anyhow::bail!("invalid animation duration: {}s", duration);
        }

        let step = 1.0 / (duration * tick_rate.per_second());
        if !step.is_finite() || step <= 0.0 {
            anyhow::bail!(
                "animation step {} from {}s at {} ticks/s is unusable",
                step,
                duration,
                tick_rate.per_second()
            );
        }
        Ok(Self {
            sheet: sheet.with_initial_index(first as isize),
            pattern: pattern.into(),
            progress: 0.0,
            step,
            duration,
            looping,
            state: AnimationState::Playing,
        })
    }

    /// The animation owns the tile index and rewrites it on every update, so
    /// the sheet is only exposed read-only.
    pub fn sheet(&self) -> &TileSheet {
        &self.sheet
    }

    /// Current tile index.
    pub fn index(&self) -> usize {
        self.sheet.index()
    }

    pub fn pattern(&self) -> &[usize] {
        &self.pattern
    }

    /// Playback position in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Progress added per tick.
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Cycle length in seconds.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn looping(&self) -> bool {
        self.looping
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    /// Rewinds to the start. The tile changes on the next update.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.state = AnimationState::Playing;
    }

    fn last_frame(&self) -> usize {
        self.pattern[self.pattern.len() - 1]
    }

    fn frame_at_progress(&self) -> usize {
        let len = self.pattern.len();
        // progress == 1.0 would land one past the end
        let slot = ((self.progress * len as f32) as usize).min(len - 1);
        self.pattern[slot]
    }
}

/// Clones share the sheet's image and tiles but start from the beginning of
/// the pattern.
impl Clone for AnimatedTileSheet {
    fn clone(&self) -> Self {
        Self {
            sheet: self.sheet.clone(),
            pattern: Arc::clone(&self.pattern),
            progress: 0.0,
            step: self.step,
            duration: self.duration,
            looping: self.looping,
            state: AnimationState::Playing,
        }
    }
}

impl Drawable for AnimatedTileSheet {
    fn visual(&self) -> &Visual {
        self.sheet.visual()
    }

    fn visual_mut(&mut self) -> &mut Visual {
        self.sheet.visual_mut()
    }

    fn update(&mut self) -> bool {
        self.progress += self.step;
        if self.progress > 1.0 {
            if !self.looping {
                self.progress = 1.0;
                let last = self.last_frame();
                self.sheet.set_index(last as isize);
                if self.state == AnimationState::Playing {
                    log::trace!("animation on image {} finished", self.sheet.image().id());
                    self.state = AnimationState::HeldAtEnd;
                }
                return true;
            }
            log::trace!("animation on image {} wrapped", self.sheet.image().id());
            self.progress = 0.0;
        }
        let frame = self.frame_at_progress();
        self.sheet.set_index(frame as isize);
        false
    }

    fn draw(&self, target: &mut dyn RenderTarget, options: DrawOption) -> anyhow::Result<()> {
        self.sheet.draw(target, options)
    }

    fn boxed_clone(&self) -> Box<dyn Drawable> {
        Box::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{Context, DrawCommand};
    use crate::image::{Bounds, Image};
    use crate::pattern;
    use proptest::prelude::*;

    fn sheet(n: u32) -> TileSheet {
        let image = Image {
            id: 9,
            width: 16 * n,
            height: 16,
        };
        TileSheet::from_grid(image, n, 1).unwrap()
    }

    fn rate(per_second: f32) -> TickRate {
        TickRate::new(per_second).unwrap()
    }

    #[test]
    fn test_rejects_bad_construction() {
        assert!(AnimatedTileSheet::new(sheet(4), Vec::new(), 1.0, true, rate(60.0)).is_err());
        assert!(AnimatedTileSheet::new(sheet(4), vec![0, 4], 1.0, true, rate(60.0)).is_err());
        assert!(AnimatedTileSheet::new(sheet(4), vec![0], 0.0, true, rate(60.0)).is_err());
        assert!(AnimatedTileSheet::new(sheet(4), vec![0], -1.0, true, rate(60.0)).is_err());
        assert!(AnimatedTileSheet::new(sheet(4), vec![0], f32::NAN, true, rate(60.0)).is_err());
    }

    #[test]
    fn test_rejects_step_that_vanishes() {
        let result = AnimatedTileSheet::new(sheet(2), vec![0, 1], 1e37, false, rate(60.0));
        assert!(result.is_err());
        assert!(AnimatedTileSheet::new(sheet(2), vec![0, 1], 1e-44, false, rate(60.0)).is_err());
    }

    #[test]
    fn test_starts_on_first_pattern_frame() {
        let anim = AnimatedTileSheet::new(sheet(8), vec![5, 6, 7], 1.0, true, rate(60.0)).unwrap();
        assert_eq!(anim.index(), 5);
        assert_eq!(anim.sheet().initial_index(), 5);
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.state(), AnimationState::Playing);
    }

    #[test]
    fn test_step_depends_on_tick_rate_at_construction() {
        let slow = AnimatedTileSheet::new(sheet(2), vec![0, 1], 2.0, true, rate(30.0)).unwrap();
        let fast = AnimatedTileSheet::new(sheet(2), vec![0, 1], 2.0, true, rate(120.0)).unwrap();
        assert!((slow.step() - 1.0 / 60.0).abs() < 1e-7);
        assert!((fast.step() - 1.0 / 240.0).abs() < 1e-7);
    }

    #[test]
    fn test_play_once_finishes_and_holds() {
        // 10 ticks/s over a third of a second: step 0.3
        let mut anim =
            AnimatedTileSheet::new(sheet(8), vec![4, 5, 6, 7], 1.0 / 3.0, false, rate(10.0))
                .unwrap();
        assert!((anim.step() - 0.3).abs() < 1e-6);

        assert!(!anim.update());
        assert_eq!(anim.index(), 5);
        assert!(!anim.update());
        assert_eq!(anim.index(), 6);
        assert!(!anim.update());
        assert_eq!(anim.index(), 7);

        assert!(anim.update());
        assert_eq!(anim.index(), 7);
        assert_eq!(anim.progress(), 1.0);
        assert_eq!(anim.state(), AnimationState::HeldAtEnd);

        for _ in 0..5 {
            assert!(anim.update());
            assert_eq!(anim.index(), 7);
            assert_eq!(anim.progress(), 1.0);
        }
    }

    #[test]
    fn test_looping_wraps_and_never_finishes() {
        // step 0.4: wraps on the third tick
        let mut anim =
            AnimatedTileSheet::new(sheet(2), vec![0, 1], 0.25, true, rate(10.0)).unwrap();
        assert!(!anim.update());
        assert_eq!(anim.index(), 0);
        assert!(!anim.update());
        assert_eq!(anim.index(), 1);
        assert!(!anim.update());
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.index(), 0);

        for _ in 0..500 {
            assert!(!anim.update());
            assert_eq!(anim.state(), AnimationState::Playing);
        }
    }

    #[test]
    fn test_looping_wraps_within_one_cycle_of_ticks() {
        let mut anim =
            AnimatedTileSheet::new(sheet(4), pattern::range(4), 0.71, true, rate(60.0)).unwrap();
        let ticks = (1.0 / anim.step()).ceil() as usize;
        let mut wrapped = false;
        let mut last = anim.progress();
        for _ in 0..ticks {
            assert!(!anim.update());
            if anim.progress() < last {
                wrapped = true;
            }
            last = anim.progress();
        }
        assert!(wrapped);
    }

    #[test]
    fn test_reset_rewinds_without_touching_tile() {
        // step is exactly 1.0: the first tick lands on progress 1.0, the second passes it
        let mut anim =
            AnimatedTileSheet::new(sheet(3), vec![0, 1, 2], 0.5, false, rate(2.0)).unwrap();
        assert!(!anim.update());
        assert_eq!(anim.index(), 2);
        assert!(anim.update());
        assert_eq!(anim.state(), AnimationState::HeldAtEnd);

        anim.reset();
        assert_eq!(anim.progress(), 0.0);
        assert_eq!(anim.state(), AnimationState::Playing);
        assert_eq!(anim.index(), 2);

        assert!(!anim.update());
        assert!(anim.update());
    }

    #[test]
    fn test_shuttle_pattern_playback() {
        let mut anim = AnimatedTileSheet::new(
            sheet(3),
            pattern::shuttle_range(3),
            0.4,
            true,
            rate(10.0),
        )
        .unwrap();
        // step 0.25 over [0, 1, 2, 1]
        let mut seen = Vec::new();
        for _ in 0..4 {
            anim.update();
            seen.push(anim.index());
        }
        assert_eq!(seen, vec![1, 2, 1, 1]);
    }

    #[test]
    fn test_clone_restarts_and_is_independent() {
        let mut original =
            AnimatedTileSheet::new(sheet(4), vec![3, 2, 1, 0], 1.0, false, rate(8.0)).unwrap();
        for _ in 0..5 {
            original.update();
        }
        let progress = original.progress();
        let index = original.index();

        let mut copy = original.clone();
        assert_eq!(copy.progress(), 0.0);
        assert_eq!(copy.index(), 3);
        assert_eq!(copy.step(), original.step());

        copy.update();
        copy.visual_mut().offset = ultraviolet::Vec2::new(4.0, 4.0);
        assert_eq!(original.progress(), progress);
        assert_eq!(original.index(), index);
        assert_eq!(original.visual().offset, ultraviolet::Vec2::zero());
        assert_eq!(copy.sheet().image(), original.sheet().image());
    }

    #[test]
    fn test_draw_blits_current_frame() {
        let mut anim =
            AnimatedTileSheet::new(sheet(4), vec![2, 3], 0.2, true, rate(10.0)).unwrap();
        anim.update();
        let mut ctx = Context::new();
        anim.draw(&mut ctx, DrawOption::default()).unwrap();
        match &ctx.commands()[0] {
            DrawCommand::Image { src, .. } => assert_eq!(*src, Bounds::new(48, 0, 16, 16)),
            other => panic!("unexpected command {:?}", other),
        }
    }

    proptest! {
        #[test]
        fn prop_index_follows_pattern(
            pattern in proptest::collection::vec(0usize..6, 1..12),
            duration in 0.05f32..3.0,
            looping in any::<bool>(),
            ticks in 1usize..400,
        ) {
            let mut anim =
                AnimatedTileSheet::new(sheet(6), pattern.clone(), duration, looping, rate(60.0))
                    .unwrap();
            for _ in 0..ticks {
                let finished = anim.update();
                prop_assert!(anim.progress() >= 0.0 && anim.progress() <= 1.0);
                if finished {
                    prop_assert!(!looping);
                    prop_assert_eq!(anim.index(), pattern[pattern.len() - 1]);
                } else {
                    let slot = ((anim.progress() * pattern.len() as f32) as usize)
                        .min(pattern.len() - 1);
                    prop_assert_eq!(anim.index(), pattern[slot]);
                }
            }
        }
    }
}
