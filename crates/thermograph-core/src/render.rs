//! Whole-chart rendering into recorded scenes.
//!
//! The grid and the legend are drawn on separate surfaces. Both are fully
//! recorded before anything reaches a real document, so a failure never
//! leaves a half-drawn chart behind.

use crate::config::HeatmapConfig;
use crate::context::RenderContext;
use crate::dataset::TemperatureDataset;
use crate::error::HeatmapError;
use crate::heatmap::render_heatmap;
use crate::legend::render_legend;
use crate::page::ids;
use crate::surface::{CellDatum, DrawSurface, RecordingSurface, RectSpec};
use crate::Size;
use serde::Serialize;

/// Recorded grid and legend for one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct Scene {
    /// Main surface: axes and cells
    pub graph: RecordingSurface,
    /// Legend surface
    pub legend: RecordingSurface,
}

impl Scene {
    /// Cells with their records, in dataset order.
    pub fn cells(&self) -> impl Iterator<Item = (&RectSpec, &CellDatum)> + '_ {
        self.graph.cells()
    }

    /// Number of cells drawn.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Replay the grid and the legend onto live surfaces.
    pub fn commit<G, L>(&self, graph: &mut G, legend: &mut L) -> Result<(), HeatmapError>
    where
        G: DrawSurface + ?Sized,
        L: DrawSurface + ?Sized,
    {
        self.graph.replay(graph)?;
        self.legend.replay(legend)?;
        Ok(())
    }

    /// Replay onto detached surfaces, then run `attach` to put them on the
    /// page.
    ///
    /// `attach` only runs once every node has been drawn, so a backend
    /// failure never shows a partial grid.
    pub fn commit_and_attach<G, L, T, A>(
        &self,
        graph: &mut G,
        legend: &mut L,
        attach: A,
    ) -> Result<T, HeatmapError>
    where
        G: DrawSurface + ?Sized,
        L: DrawSurface + ?Sized,
        A: FnOnce(&mut G, &mut L) -> Result<T, HeatmapError>,
    {
        self.commit(graph, legend)?;
        attach(graph, legend)
    }

    /// Both surfaces as one standalone SVG document, legend below the grid.
    #[must_use]
    pub fn to_svg(&self) -> String {
        let graph = self.graph.size();
        let legend = self.legend.size();
        let width = graph.width.max(legend.width);
        let height = graph.height + legend.height;

        format!(
            r#"<svg xmlns="{ns}" width="{width}" height="{height}"><g id="{graph_id}">{main}</g><g transform="translate(0,{offset})">{legend_svg}</g></svg>"#,
            ns = crate::page::SVG_NS,
            graph_id = ids::GRAPH,
            main = self.graph.to_svg(None, None),
            offset = graph.height,
            legend_svg = self.legend.to_svg(None, Some("legend-surface")),
        )
    }
}

/// Record the full chart for `dataset` in a `viewport`-sized graph area.
pub fn render(
    dataset: &TemperatureDataset,
    viewport: Size,
    config: &HeatmapConfig,
) -> Result<Scene, HeatmapError> {
    let ctx = RenderContext::new(dataset, viewport, config)?;

    let mut graph = RecordingSurface::new(viewport);
    render_heatmap(&ctx, &mut graph)?;

    let mut legend = RecordingSurface::new(Size::new(viewport.width, config.legend.height));
    render_legend(&ctx, &mut legend)?;

    Ok(Scene { graph, legend })
}

/// Decode a dataset and render it straight to SVG markup.
pub fn render_svg(
    dataset_json: &str,
    viewport: Size,
    config: &HeatmapConfig,
) -> Result<String, HeatmapError> {
    let dataset = TemperatureDataset::from_json(dataset_json)?;
    Ok(render(&dataset, viewport, config)?.to_svg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::MonthlyRecord;
    use crate::surface::{GroupId, GroupSpec, LineSpec, SurfaceError, TextSpec};

    #[test]
    fn test_render_records_both_surfaces() {
        let ds = TemperatureDataset::new(8.0, vec![MonthlyRecord::new(1900, 1, -2.5)]).unwrap();
        let config = HeatmapConfig::default();
        let scene = render(&ds, Size::new(600.0, 400.0), &config).unwrap();

        assert_eq!(scene.cell_count(), 1);
        assert_eq!(scene.graph.size(), Size::new(600.0, 400.0));
        assert_eq!(scene.legend.size(), Size::new(600.0, 80.0));
        assert!(scene.legend.group_by_id(ids::LEGEND).is_some());
    }

    #[test]
    fn test_render_precondition_leaves_nothing_drawn() {
        let ds = TemperatureDataset::new(8.0, vec![MonthlyRecord::new(1900, 1, -2.5)]).unwrap();
        let err = render(&ds, Size::new(600.0, 50.0), &HeatmapConfig::default()).unwrap_err();
        assert!(matches!(err, HeatmapError::RenderPrecondition(_)));
    }

    #[test]
    fn test_commit_replays_onto_targets() {
        let ds = TemperatureDataset::new(8.0, vec![MonthlyRecord::new(1900, 1, -2.5)]).unwrap();
        let scene = render(&ds, Size::new(600.0, 400.0), &HeatmapConfig::default()).unwrap();

        let mut graph = RecordingSurface::default();
        let mut legend = RecordingSurface::default();
        scene.commit(&mut graph, &mut legend).unwrap();
        assert_eq!(graph.nodes(), scene.graph.nodes());
        assert_eq!(legend.nodes(), scene.legend.nodes());
    }

    /// Records calls like [`RecordingSurface`] but rejects the n-th rect.
    struct FailingSurface {
        inner: RecordingSurface,
        rects_left: usize,
    }

    impl DrawSurface for FailingSurface {
        fn add_group(
            &mut self,
            parent: Option<GroupId>,
            group: &GroupSpec,
        ) -> Result<GroupId, SurfaceError> {
            self.inner.add_group(parent, group)
        }

        fn add_rect(
            &mut self,
            parent: Option<GroupId>,
            rect: &RectSpec,
        ) -> Result<(), SurfaceError> {
            if self.rects_left == 0 {
                return Err(SurfaceError("out of elements".into()));
            }
            self.rects_left -= 1;
            self.inner.add_rect(parent, rect)
        }

        fn add_text(
            &mut self,
            parent: Option<GroupId>,
            text: &TextSpec,
        ) -> Result<(), SurfaceError> {
            self.inner.add_text(parent, text)
        }

        fn add_line(
            &mut self,
            parent: Option<GroupId>,
            line: &LineSpec,
        ) -> Result<(), SurfaceError> {
            self.inner.add_line(parent, line)
        }
    }

    fn twelve_months() -> TemperatureDataset {
        let records = (1..=12)
            .map(|month| MonthlyRecord::new(1900, month, f64::from(month) - 6.0))
            .collect();
        TemperatureDataset::new(8.0, records).unwrap()
    }

    #[test]
    fn test_failed_commit_never_attaches() {
        let scene = render(&twelve_months(), Size::new(600.0, 400.0), &HeatmapConfig::default())
            .unwrap();
        let mut graph = FailingSurface {
            inner: RecordingSurface::default(),
            rects_left: 5,
        };
        let mut legend = RecordingSurface::default();
        let mut attached = false;

        let result = scene.commit_and_attach(&mut graph, &mut legend, |_, _| {
            attached = true;
            Ok(())
        });

        assert!(matches!(result, Err(HeatmapError::Surface(_))));
        assert!(!attached);
        assert_eq!(graph.inner.cells().count(), 5);
        assert!(legend.is_empty());
    }

    #[test]
    fn test_successful_commit_attaches_full_scene() {
        let scene = render(&twelve_months(), Size::new(600.0, 400.0), &HeatmapConfig::default())
            .unwrap();
        let mut graph = RecordingSurface::default();
        let mut legend = RecordingSurface::default();

        let cells = scene
            .commit_and_attach(&mut graph, &mut legend, |graph, legend| {
                Ok((graph.cells().count(), legend.rects().count()))
            })
            .unwrap();
        assert_eq!(cells, (12, 16));
    }

    #[test]
    fn test_scene_dumps_as_json() {
        let ds = TemperatureDataset::new(8.0, vec![MonthlyRecord::new(1900, 1, -2.5)]).unwrap();
        let scene = render(&ds, Size::new(600.0, 400.0), &HeatmapConfig::default()).unwrap();
        let json = serde_json::to_value(&scene).unwrap();

        let nodes = json["graph"]["nodes"].as_array().unwrap();
        assert_eq!(nodes.len(), scene.graph.len());
        let cell = nodes.iter().find(|n| n["Rect"]["spec"]["cell"].is_object()).unwrap();
        assert_eq!(cell["Rect"]["spec"]["fill"], "#339af0");
        assert_eq!(cell["Rect"]["spec"]["cell"]["temperature"], 5.5);
    }

    #[test]
    fn test_render_svg_rejects_bad_json() {
        let err = render_svg("{", Size::new(600.0, 400.0), &HeatmapConfig::default()).unwrap_err();
        assert!(matches!(err, HeatmapError::Parse(_)));
    }
}
