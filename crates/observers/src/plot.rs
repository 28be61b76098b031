//! Plotting observer for comparing numerical and analytical solutions.
//!
//! See [`PlotObserver`] and [`Plottable`] for usage.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use kutta_core::Observer;
use kutta_solvers::ode::rk4;

pub use eframe::egui::Color32;
pub use egui_plot::LineStyle;

/// Color and line style of one trace.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraceStyle {
    pub color: Color32,
    pub line: LineStyle,
}

impl TraceStyle {
    /// A solid line in the given color.
    #[must_use]
    pub fn solid(color: Color32) -> Self {
        Self {
            color,
            line: LineStyle::Solid,
        }
    }
}

/// Configuration for rendering a [`PlotObserver`] result.
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
/// All fields are independent with sensible defaults.
///
/// # Example
///
/// ```ignore
/// obs.show(
///     ShowConfig::new()
///         .title("y'' - 4y = 0, h = 0.5, Runge–Kutta method")
///         .legend()
///         .axis_labels("x", "y")
///         .style(0, TraceStyle::solid(Color32::BLUE))
///         .style(1, TraceStyle::solid(Color32::RED)),
/// )?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    log_y: bool,
    x_label: Option<String>,
    y_label: Option<String>,
    size: [f32; 2],
    styles: Vec<(usize, TraceStyle)>,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: no title, no legend, linear
    /// scale, no axis labels, a 1600×900 window, and automatic trace colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            log_y: false,
            x_label: None,
            y_label: None,
            size: [1600.0, 900.0],
            styles: Vec::new(),
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Enables a logarithmic y-axis (base 10).
    ///
    /// y values are transformed with log₁₀ before plotting. Non-positive
    /// values are silently skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    /// Sets the axis labels.
    #[must_use]
    pub fn axis_labels(mut self, x: impl Into<String>, y: impl Into<String>) -> Self {
        self.x_label = Some(x.into());
        self.y_label = Some(y.into());
        self
    }

    /// Sets the initial window size in points.
    #[must_use]
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = [width, height];
        self
    }

    /// Sets the style of the trace at `index`, replacing any earlier style.
    #[must_use]
    pub fn style(mut self, index: usize, style: TraceStyle) -> Self {
        self.styles.retain(|(i, _)| *i != index);
        self.styles.push((index, style));
        self
    }

    fn style_of(&self, index: usize) -> Option<TraceStyle> {
        self.styles
            .iter()
            .find_map(|(i, style)| (*i == index).then_some(*style))
    }

    fn y_label(&self) -> Option<String> {
        match (&self.y_label, self.log_y) {
            (Some(label), true) => Some(format!("log₁₀ {label}")),
            (Some(label), false) => Some(label.clone()),
            (None, true) => Some("log₁₀".to_owned()),
            (None, false) => None,
        }
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts plottable data from a solver event.
///
/// Implement this on your event type to use [`PlotObserver`] directly as a
/// solver observer (the "direct path"). Return `None` from [`x`][Plottable::x]
/// to skip the event entirely; return `None` in a trace slot to skip that
/// trace for the event.
///
/// [`rk4::Event`] implements `Plottable<N>` for every `N`, placing `y` in
/// trace 0 and leaving the other traces empty. The remaining traces are free
/// for data recorded with [`PlotObserver::record`], such as an analytical
/// reference.
///
/// # Example — direct path
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["Numerical Solution", "Analytical Solution"]);
/// for [x, y] in reference {
///     obs.record(x, [None, Some(y)]);
/// }
///
/// rk4::solve(&system, initial, xn, h, &rk4::Config::default(), &mut obs)?;
/// obs.show(ShowConfig::new().title("Comparison").legend())?;
/// ```
pub trait Plottable<const N: usize> {
    /// The x-axis value for this event, or `None` to skip recording entirely.
    fn x(&self) -> Option<f64>;

    /// The y-axis values for each trace.
    ///
    /// `None` in a slot skips that trace for this event while leaving others
    /// unaffected.
    fn traces(&self) -> [Option<f64>; N];
}

impl<const N: usize> Plottable<N> for rk4::Event {
    fn x(&self) -> Option<f64> {
        Some(self.state.x)
    }

    fn traces(&self) -> [Option<f64>; N] {
        std::array::from_fn(|i| (i == 0).then_some(self.state.y))
    }
}

/// An observer that collects trace data during solving and displays it via egui.
///
/// The const generic `N` is the number of traces. Create with
/// [`PlotObserver::new`], passing the trace names. Record data by either:
///
/// - **Direct path** — pass `&mut PlotObserver` as the solver observer. Works
///   for any event type implementing [`Plottable<N>`][Plottable], including
///   [`rk4::Event`].
/// - **Closure path** — wrap `&mut PlotObserver` in a closure and call
///   [`record`][PlotObserver::record] manually, or call `record` outside any
///   solver to add precomputed data.
///
/// Call [`show`][PlotObserver::show] with a [`ShowConfig`] to render the result.
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    data: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    /// Creates a new `PlotObserver` with the given trace names.
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            data: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Records a single data point across all traces.
    ///
    /// For each trace slot, `None` skips recording for that trace while
    /// leaving other traces unaffected.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (i, y) in traces.into_iter().enumerate() {
            if let Some(y) = y {
                self.data[i].push([x, y]);
            }
        }
    }

    /// Returns the points recorded for the trace at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.data[index]
    }

    /// Opens a blocking egui window displaying all collected traces.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default().with_inner_size(config.size),
            ..Default::default()
        };
        let title = config.title.clone().unwrap_or_default();
        let traces: Vec<Trace> = self
            .names
            .into_iter()
            .zip(self.data)
            .enumerate()
            .map(|(i, (name, points))| Trace {
                name,
                points,
                style: config.style_of(i),
            })
            .collect();

        eframe::run_native(
            &title,
            options,
            Box::new(move |_cc| {
                Ok(Box::new(PlotApp {
                    traces,
                    legend: config.legend,
                    log_y: config.log_y,
                    x_label: config.x_label.clone(),
                    y_label: config.y_label(),
                }))
            }),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Allows `&mut PlotObserver<N>` to be passed to solvers that take an observer
/// by value, so [`PlotObserver::show`] can be called after the solve completes.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

struct Trace {
    name: String,
    points: Vec<[f64; 2]>,
    style: Option<TraceStyle>,
}

/// The egui [`eframe::App`] that renders collected traces.
struct PlotApp {
    traces: Vec<Trace>,
    legend: bool,
    log_y: bool,
    x_label: Option<String>,
    y_label: Option<String>,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("plot_observer");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.as_str());
            }
            if let Some(label) = &self.y_label {
                plot = plot.y_axis_label(label.as_str());
            }
            let log_y = self.log_y;
            plot.show(ui, |plot_ui| {
                for trace in &self.traces {
                    let plot_points: PlotPoints = if log_y {
                        trace
                            .points
                            .iter()
                            .filter(|p| p[1] > 0.0)
                            .map(|p| [p[0], p[1].log10()])
                            .collect()
                    } else {
                        trace.points.iter().copied().collect()
                    };
                    let mut line = Line::new(plot_points).name(&trace.name);
                    if let Some(style) = trace.style {
                        line = line.color(style.color).style(style.line);
                    }
                    plot_ui.line(line);
                }
            });
        });
    }
}
