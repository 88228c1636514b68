use std::path::Path;

use anyhow::Context as _;
use rayon::prelude::*;

use crate::canvas::view::{PixelView, PixelViewMut};
use crate::compose::bounds::check_fits;
use crate::compose::ops::{
    compose_onto, compose_row, fast_compose_onto, fast_row, replace_onto, replace_row,
};
use crate::foundation::core::Offset;
use crate::foundation::error::{PixcompError, PixcompResult};
use crate::foundation::pixel::Pixel;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Threading controls for placement operations.
pub struct CompositorSettings {
    /// Split placements across rows on a dedicated rayon pool when `true`.
    pub parallel: bool,
    /// Optional explicit worker thread count (must be >= 1 when set).
    pub threads: Option<usize>,
    /// Foregrounds smaller than this many pixels always run sequentially.
    pub min_parallel_pixels: usize,
}

impl Default for CompositorSettings {
    fn default() -> Self {
        Self {
            parallel: false,
            threads: None,
            min_parallel_pixels: 64 * 1024,
        }
    }
}

impl CompositorSettings {
    /// Parse settings from JSON; missing fields take their defaults.
    pub fn from_json_str(s: &str) -> PixcompResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| PixcompError::invalid_argument(format!("invalid compositor settings: {e}")))
    }

    /// Read and parse a JSON settings file.
    pub fn from_path(path: &Path) -> PixcompResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read compositor settings '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Placement {
    Compose,
    Replace,
    Fast,
}

impl Placement {
    fn row_op(self) -> fn(&mut [Pixel], &[Pixel]) {
        match self {
            Self::Compose => compose_row,
            Self::Replace => replace_row,
            Self::Fast => fast_row,
        }
    }

    fn run_sequential(
        self,
        bg: &mut PixelViewMut<'_>,
        fg: PixelView<'_>,
        offset: Offset,
    ) -> PixcompResult<()> {
        match self {
            Self::Compose => compose_onto(bg, fg, offset),
            Self::Replace => replace_onto(bg, fg, offset),
            Self::Fast => fast_compose_onto(bg, fg, offset),
        }
    }
}

/// Reusable placement engine.
///
/// With [`CompositorSettings::parallel`] off this is a thin wrapper over
/// [`compose_onto`], [`replace_onto`] and [`fast_compose_onto`]. With it on,
/// large placements are split by rows over a dedicated thread pool. Every
/// foreground row maps to a disjoint background span, so the output is
/// bit-identical to the sequential path.
#[derive(Default)]
pub struct Compositor {
    settings: CompositorSettings,
    pool: Option<rayon::ThreadPool>,
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("settings", &self.settings)
            .field("pool_threads", &self.pool.as_ref().map(|p| p.current_num_threads()))
            .finish()
    }
}

impl Compositor {
    /// Build a compositor; creates the thread pool up front in parallel mode.
    pub fn new(settings: CompositorSettings) -> PixcompResult<Self> {
        if settings.threads == Some(0) {
            return Err(PixcompError::invalid_argument(
                "compositor 'threads' must be >= 1 when set",
            ));
        }
        let pool = if settings.parallel {
            Some(build_thread_pool(settings.threads)?)
        } else {
            None
        };
        Ok(Self { settings, pool })
    }

    /// Active settings.
    pub fn settings(&self) -> &CompositorSettings {
        &self.settings
    }

    /// [`compose_onto`], possibly row-parallel.
    #[tracing::instrument(level = "debug", skip(self, bg, fg))]
    pub fn compose_onto(
        &self,
        bg: &mut PixelViewMut<'_>,
        fg: PixelView<'_>,
        offset: Offset,
    ) -> PixcompResult<()> {
        self.place(Placement::Compose, bg, fg, offset)
    }

    /// [`replace_onto`], possibly row-parallel.
    #[tracing::instrument(level = "debug", skip(self, bg, fg))]
    pub fn replace_onto(
        &self,
        bg: &mut PixelViewMut<'_>,
        fg: PixelView<'_>,
        offset: Offset,
    ) -> PixcompResult<()> {
        self.place(Placement::Replace, bg, fg, offset)
    }

    /// [`fast_compose_onto`], possibly row-parallel. Same sentinel semantics.
    #[tracing::instrument(level = "debug", skip(self, bg, fg))]
    pub fn fast_compose_onto(
        &self,
        bg: &mut PixelViewMut<'_>,
        fg: PixelView<'_>,
        offset: Offset,
    ) -> PixcompResult<()> {
        self.place(Placement::Fast, bg, fg, offset)
    }

    fn place(
        &self,
        placement: Placement,
        bg: &mut PixelViewMut<'_>,
        fg: PixelView<'_>,
        offset: Offset,
    ) -> PixcompResult<()> {
        let fg_pixels = fg.pixels().len();
        let pool = match &self.pool {
            Some(pool) if fg_pixels >= self.settings.min_parallel_pixels => pool,
            _ => {
                tracing::debug!(?placement, fg_pixels, "sequential placement");
                return placement.run_sequential(bg, fg, offset);
            }
        };

        check_fits(bg.width(), bg.height(), fg.width(), fg.height(), offset)?;
        tracing::debug!(
            ?placement,
            fg_pixels,
            threads = pool.current_num_threads(),
            "row-parallel placement"
        );

        let bg_w = bg.width() as usize;
        let fg_w = fg.width() as usize;
        let fg_h = fg.height() as usize;
        let dx = offset.dx as usize;
        let dy = offset.dy as usize;
        let row_op = placement.row_op();

        let rows = &mut bg.pixels_mut()[dy * bg_w..(dy + fg_h) * bg_w];
        pool.install(|| {
            rows.par_chunks_mut(bg_w)
                .zip(fg.pixels().par_chunks(fg_w))
                .for_each(|(dst, src)| row_op(&mut dst[dx..dx + fg_w], src));
        });
        Ok(())
    }
}

fn build_thread_pool(threads: Option<usize>) -> PixcompResult<rayon::ThreadPool> {
    let mut builder = rayon::ThreadPoolBuilder::new().thread_name(|i| format!("pixcomp-{i}"));
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    let pool = builder
        .build()
        .context("failed to build rayon thread pool")?;
    tracing::debug!(threads = pool.current_num_threads(), "compositor thread pool ready");
    Ok(pool)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
