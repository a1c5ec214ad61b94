use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use shared::TrendPoint;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const CHART_WIDTH: u32 = 760;
const CHART_HEIGHT: u32 = 320;

const INCOME_COLOR: RGBColor = RGBColor(34, 197, 94);
const EXPENSES_COLOR: RGBColor = RGBColor(239, 68, 68);

#[derive(Properties, PartialEq)]
pub struct TrendChartProps {
    pub data: Vec<TrendPoint>,
}

pub enum Msg {}

/// Income/expenses trend drawn on a canvas, one point per bucket of the
/// series returned by the API.
pub struct TrendChart {
    canvas_ref: NodeRef,
}

impl Component for TrendChart {
    type Message = Msg;
    type Properties = TrendChartProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            canvas_ref: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().data != old_props.data {
            self.draw(&ctx.props().data);
        }
        true
    }

    fn rendered(&mut self, ctx: &Context<Self>, _first_render: bool) {
        self.draw(&ctx.props().data);
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if ctx.props().data.is_empty() {
            return html! {
                <p class="chart-empty">{"Nessun dato disponibile per il periodo selezionato."}</p>
            };
        }
        html! {
            <div class="chart-content">
                <canvas
                    ref={self.canvas_ref.clone()}
                    width={CHART_WIDTH.to_string()}
                    height={CHART_HEIGHT.to_string()}
                ></canvas>
                <div class="chart-legend">
                    <span class="legend-income">{"Entrate"}</span>
                    <span class="legend-expenses">{"Uscite"}</span>
                </div>
            </div>
        }
    }
}

impl TrendChart {
    fn draw(&self, data: &[TrendPoint]) {
        if data.is_empty() {
            return;
        }
        let Some(canvas) = self.canvas_ref.cast::<HtmlCanvasElement>() else {
            return;
        };
        canvas.set_width(CHART_WIDTH);
        canvas.set_height(CHART_HEIGHT);

        let Some(backend) = CanvasBackend::with_canvas_object(canvas) else {
            return;
        };
        let root = backend.into_drawing_area();
        if root.fill(&WHITE).is_err() {
            return;
        }

        let labels: Vec<String> = data.iter().map(|p| p.label.clone()).collect();
        let y_max = data
            .iter()
            .flat_map(|p| [p.income, p.expenses])
            .fold(0.0_f64, f64::max)
            .max(1.0)
            * 1.1;
        let x_max = (data.len().saturating_sub(1)).max(1) as f64;

        let mut chart = match ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(35)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..x_max, 0.0..y_max)
        {
            Ok(chart) => chart,
            Err(_) => return,
        };

        let label_for = move |v: &f64| -> String {
            let index = v.round() as usize;
            labels.get(index).cloned().unwrap_or_default()
        };

        if chart
            .configure_mesh()
            .y_label_formatter(&|v| format!("{v:.0} €"))
            .x_label_formatter(&label_for)
            .x_labels(data.len().min(8))
            .y_labels(8)
            .label_style(("sans-serif", 12, &RGBColor(100, 116, 139)))
            .axis_style(&RGBColor(226, 232, 240))
            .bold_line_style(&RGBColor(241, 245, 249))
            .draw()
            .is_err()
        {
            return;
        }

        for (series, color) in [
            (
                data.iter().map(|p| p.income).collect::<Vec<_>>(),
                INCOME_COLOR,
            ),
            (
                data.iter().map(|p| p.expenses).collect::<Vec<_>>(),
                EXPENSES_COLOR,
            ),
        ] {
            let points: Vec<(f64, f64)> = series
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect();
            if chart
                .draw_series(LineSeries::new(points.iter().copied(), color.stroke_width(3)))
                .is_err()
            {
                return;
            }
            for (x, y) in points {
                let _ = chart.draw_series(std::iter::once(Circle::new((x, y), 4, color.filled())));
            }
        }

        let _ = root.present();
    }
}
