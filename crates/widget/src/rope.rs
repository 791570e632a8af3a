use iced::mouse;
use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineCap, Path, Stroke, Text};
use iced::{Element, Font, Length, Point, Rectangle, Renderer, Size, Theme, Vector};

use rope_core::{LinearProgressModel, Padding, ProgressState, TextMeasure};
use rope_geometry::bubble::CORNER_RADIUS;
use rope_geometry::{preferred_size, BubbleMetrics, Completed, Scene};
use rope_theme::{line_colors, Color, RopeStyle};

use crate::measure::MonoMeasure;

/// Animated rope-style progress indicator.
///
/// A line sags under virtual gravity proportional to progress, and a
/// value bubble tracks the rope's end horizontally. The host drives it:
/// setters mutate state and invalidate the cached geometry, and the next
/// `view` reports the (possibly changed) preferred size for the host's
/// layout pass to resolve.
pub struct RopeProgress {
    style: RopeStyle,
    progress: ProgressState,
    padding: Padding,
    measure: Box<dyn TextMeasure>,
    metrics: BubbleMetrics,
    // Shape templates at the origin. Draws translate copies into place on
    // the frame's saved transform; the templates themselves never move.
    bubble_path: Path,
    triangle_path: Path,
    cache: canvas::Cache,
}

impl RopeProgress {
    pub fn new() -> Self {
        Self::with_style(RopeStyle::default())
    }

    pub fn with_style(style: RopeStyle) -> Self {
        Self::with_measurer(style, Box::new(MonoMeasure))
    }

    /// Construct with a host-supplied text measurer (see
    /// [`rope_core::TextMeasure`]).
    pub fn with_measurer(style: RopeStyle, measure: Box<dyn TextMeasure>) -> Self {
        let progress = ProgressState::default();
        let padding = Padding::uniform(style.padding);
        let metrics = BubbleMetrics::measure(progress.max(), style.text_size, measure.as_ref());
        let (bubble_path, triangle_path) = build_templates(&metrics);

        Self {
            style,
            progress,
            padding,
            measure,
            metrics,
            bubble_path,
            triangle_path,
            cache: canvas::Cache::new(),
        }
    }

    // ── Mutators ──────────────────────────────────────────────────────────────
    //
    // Every mutator invalidates the cached geometry (the redraw trigger).
    // The ones that change the preferred size are picked up by the host on
    // the next `view`, which re-reports the fixed height.

    pub fn set_progress(&mut self, progress: i32) {
        if self.progress.progress() != progress {
            self.progress.set_progress(progress);
            self.cache.clear();
        }
    }

    /// Changing the range also resizes the bubble: it is sized once for
    /// the widest value the range can produce.
    pub fn set_max(&mut self, max: i32) {
        if self.progress.max() != max {
            self.progress.set_max(max);
            self.rebuild_bubble();
            self.cache.clear();
        }
    }

    /// `None` resolves the color from the host theme at draw time.
    pub fn set_primary(&mut self, color: Option<Color>) {
        self.style.primary = color;
        self.cache.clear();
    }

    /// `None` resolves the color from the host theme at draw time.
    pub fn set_secondary(&mut self, color: Option<Color>) {
        self.style.secondary = color;
        self.cache.clear();
    }

    pub fn set_slack(&mut self, slack: f32) {
        self.style.slack = slack;
        self.cache.clear();
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.style.stroke_width = width;
        self.cache.clear();
    }

    pub fn set_text_size(&mut self, size: f32) {
        self.style.text_size = size;
        self.rebuild_bubble();
        self.cache.clear();
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
        self.cache.clear();
    }

    /// Replace the whole style at once (config reload path).
    pub fn set_style(&mut self, style: RopeStyle) {
        tracing::debug!(
            stroke_width = style.stroke_width,
            slack = style.slack,
            "rope style updated"
        );
        self.padding = Padding::uniform(style.padding);
        self.style = style;
        self.rebuild_bubble();
        self.cache.clear();
    }

    // ── Getters ───────────────────────────────────────────────────────────────

    pub fn progress(&self) -> i32 {
        self.progress.progress()
    }

    pub fn max(&self) -> i32 {
        self.progress.max()
    }

    pub fn slack(&self) -> f32 {
        self.style.slack
    }

    pub fn stroke_width(&self) -> f32 {
        self.style.stroke_width
    }

    pub fn style(&self) -> &RopeStyle {
        &self.style
    }

    // ── Measurement ───────────────────────────────────────────────────────────

    /// Preferred height: padding + stroke + slack + the bubble stack.
    /// `view` fixes the canvas to this; the host's layout resolves it
    /// against the parent limits.
    pub fn preferred_height(&self) -> f32 {
        preferred_size(
            self.padding,
            self.style.stroke_width,
            self.style.slack,
            &self.metrics,
        )
        .height
    }

    /// Minimum useful width (padding + stroke). Content never drives
    /// width; hosts stretch the widget horizontally.
    pub fn min_width(&self) -> f32 {
        preferred_size(
            self.padding,
            self.style.stroke_width,
            self.style.slack,
            &self.metrics,
        )
        .width
    }

    /// The widget as an element, ready to embed in a host view.
    pub fn view<Message: 'static>(&self) -> Element<'_, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fixed(self.preferred_height()))
            .into()
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn rebuild_bubble(&mut self) {
        self.metrics = BubbleMetrics::measure(
            self.progress.max(),
            self.style.text_size,
            self.measure.as_ref(),
        );
        let (bubble, triangle) = build_templates(&self.metrics);
        self.bubble_path = bubble;
        self.triangle_path = triangle;
    }

    /// Replay a [`Scene`] in its paint order.
    fn paint(&self, frame: &mut Frame, scene: &Scene, primary: Color, secondary: Color) {
        let stroke = |color: Color| Stroke {
            line_cap: LineCap::Round,
            ..Stroke::default()
                .with_color(color.to_iced())
                .with_width(self.style.stroke_width)
        };

        frame.stroke(
            &Path::line(point(scene.remaining.from), point(scene.remaining.to)),
            stroke(secondary),
        );

        match scene.completed {
            Completed::Line(seg) => {
                frame.stroke(&Path::line(point(seg.from), point(seg.to)), stroke(primary));
            }
            Completed::Dot { center, radius } => {
                frame.fill(&Path::circle(point(center), radius), primary.to_iced());
            }
        }

        frame.with_save(|frame| {
            frame.translate(Vector::new(scene.bubble_origin.x, scene.bubble_origin.y));
            frame.fill(&self.bubble_path, self.style.bubble_fill.to_iced());
        });
        frame.with_save(|frame| {
            frame.translate(Vector::new(scene.triangle_origin.x, scene.triangle_origin.y));
            frame.fill(&self.triangle_path, self.style.bubble_fill.to_iced());
        });

        frame.fill_text(Text {
            content: scene.label.text.clone(),
            position: point(scene.label.anchor),
            color: self.style.label_color.to_iced(),
            size: self.style.text_size.into(),
            font: Font::MONOSPACE,
            align_x: iced::widget::text::Alignment::Center,
            align_y: iced::alignment::Vertical::Bottom,
            ..Text::default()
        });
    }
}

impl Default for RopeProgress {
    fn default() -> Self {
        Self::new()
    }
}

/// The widget also speaks the plain progress-model contract, so hosts can
/// drive it through the abstraction instead of the concrete type.
impl LinearProgressModel for RopeProgress {
    fn progress(&self) -> i32 {
        RopeProgress::progress(self)
    }

    fn max(&self) -> i32 {
        RopeProgress::max(self)
    }

    fn set_progress(&mut self, progress: i32) {
        RopeProgress::set_progress(self, progress);
    }

    fn set_max(&mut self, max: i32) {
        RopeProgress::set_max(self, max);
    }
}

impl<Message> canvas::Program<Message> for RopeProgress {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let rope = self.cache.draw(renderer, bounds.size(), |frame| {
            let scene = Scene::compose(
                rope_geometry::Size::new(frame.width(), frame.height()),
                self.padding,
                self.style.stroke_width,
                self.style.slack,
                self.progress.progress(),
                self.progress.max(),
                &self.metrics,
            );
            let (primary, secondary) = line_colors(&self.style, Some(theme));
            self.paint(frame, &scene, primary, secondary);
        });

        vec![rope]
    }
}

/// Shape templates at the local origin.
fn build_templates(metrics: &BubbleMetrics) -> (Path, Path) {
    let bubble = Path::rounded_rectangle(
        Point::ORIGIN,
        Size::new(metrics.width, metrics.height),
        CORNER_RADIUS.into(),
    );

    let triangle = Path::new(|b| {
        b.move_to(Point::ORIGIN);
        b.line_to(Point::new(metrics.triangle_width, 0.0));
        b.line_to(Point::new(metrics.triangle_width / 2.0, metrics.triangle_height));
        b.close();
    });

    (bubble, triangle)
}

fn point(p: rope_geometry::Point) -> Point {
    Point::new(p.x, p.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slack_delta_moves_preferred_height_exactly() {
        let mut rope = RopeProgress::new();
        let base = rope.preferred_height();
        rope.set_slack(rope.slack() + 16.0);
        assert_eq!(rope.preferred_height(), base + 16.0);
    }

    #[test]
    fn stroke_delta_moves_preferred_height_exactly() {
        let mut rope = RopeProgress::new();
        let base = rope.preferred_height();
        rope.set_stroke_width(rope.stroke_width() + 2.0);
        assert_eq!(rope.preferred_height(), base + 2.0);
    }

    #[test]
    fn color_changes_leave_the_preferred_size_alone() {
        let mut rope = RopeProgress::new();
        let height = rope.preferred_height();
        let width = rope.min_width();
        rope.set_primary(Some(Color::TEAL));
        rope.set_secondary(None);
        assert_eq!(rope.preferred_height(), height);
        assert_eq!(rope.min_width(), width);
    }

    #[test]
    fn widening_the_range_grows_the_bubble() {
        let mut rope = RopeProgress::new();
        let base = rope.preferred_height();
        // 100 → three digits, 9999 → four: the worst-case label gets wider,
        // the bubble taller, and the reserved stack with it.
        rope.set_max(9999);
        assert!(rope.preferred_height() > base);
    }

    #[test]
    fn progress_changes_never_resize() {
        let mut rope = RopeProgress::new();
        let height = rope.preferred_height();
        for p in [0, 1, 50, 99, 100, 101, -3] {
            rope.set_progress(p);
            assert_eq!(rope.preferred_height(), height);
        }
    }

    #[test]
    fn model_contract_round_trips() {
        let mut rope = RopeProgress::new();
        let model: &mut dyn LinearProgressModel = &mut rope;
        model.set_progress(42);
        model.set_max(200);
        assert_eq!(model.progress(), 42);
        assert_eq!(model.max(), 200);
    }
}
