use eframe::{App as EguiApp, Frame};
use eframe::egui::{Button, CentralPanel, Color32, Context, Frame as PanelFrame, Label, Rect, Sense, Ui, Vec2};
use log::warn;
use crate::app::color_input::*;
use crate::cli::Theme;
use crate::constants::*;
use crate::game::{GameState, Phase};
use crate::render::*;
use crate::types::Color;

pub struct App {
    state: GameState,
    sliders: Color,
    theme: Theme,
}

impl EguiApp for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.show(ctx);
    }
}

impl App {
    pub fn new(state: GameState, theme: Theme) -> Self {
        let sliders = state.current();
        Self {
            state,
            sliders,
            theme,
        }
    }

    /// Desenha um frame e retorna a área ocupada pelo conteúdo.
    pub fn show(&mut self, ctx: &Context) -> Rect {
        let content = CentralPanel::default()
            .frame(PanelFrame::central_panel(&ctx.style()).inner_margin(GUI_PADDING))
            .show(ctx, |ui| {
                ui.spacing_mut().item_spacing.y = GUI_SPACING;
                self.central_panel_content(ui);
                ui.min_rect()
            })
            .inner;

        ctx.set_visuals(self.theme.visuals());

        content
    }

    pub fn central_panel_content(&mut self, ui: &mut Ui) {
        // 6 linhas, 5 espaçamentos
        let height = (ui.available_height() - GUI_SPACING * 5.0).max(0.0);
        let width = ui.available_width();
        let row = |hint: f32| height * hint / GUI_HINT_TOTAL;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(width, row(GUI_SWATCH_HINT)), Sense::hover());

        ui.add_sized([width, row(GUI_HEADING_HINT)], Label::new(HEADING_TEXT));

        if color_input(ui, &mut self.sliders, row(GUI_SLIDERS_HINT)) {
            self.state.set_current(self.sliders);
        }

        let button_size = [width, row(GUI_BUTTON_HINT)];
        if ui.add_sized(button_size, Button::new("Start")).clicked() {
            self.state.start_new_round();
        }
        if ui.add_sized(button_size, Button::new("Submit")).clicked() {
            if self.state.phase() == Phase::Idle {
                warn!("Submitted before the first round, scoring against black");
            }
            self.state.submit();
        }

        ui.add_sized(
            [width, row(GUI_FEEDBACK_HINT)],
            Label::new(self.state.feedback().to_string()),
        );

        // Pinta depois dos sliders para refletir a mudança no mesmo frame
        for swatch in swatches(&self.state, response.rect) {
            painter.rect_filled(swatch.rect, 0.0, Color32::from(swatch.fill));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::{
        pos2, vec2, Event, FullOutput, Modifiers, Pos2, PointerButton, RawInput, Shape,
    };

    fn screen(width: f32, height: f32) -> Rect {
        Rect::from_min_size(Pos2::ZERO, vec2(width, height))
    }

    fn run_frame(ctx: &Context, app: &mut App, screen: Rect, events: Vec<Event>) -> (Rect, FullOutput) {
        let input = RawInput {
            screen_rect: Some(screen),
            events,
            ..Default::default()
        };
        let mut content = Rect::NOTHING;
        let output = ctx.run(input, |ctx| {
            content = app.show(ctx);
        });
        (content, output)
    }

    fn text_rect(output: &FullOutput, text: &str) -> Option<Rect> {
        output.shapes.iter().find_map(|clipped| match &clipped.shape {
            Shape::Text(shape) if shape.galley.text() == text => Some(shape.visual_bounding_rect()),
            _ => None,
        })
    }

    fn click(ctx: &Context, app: &mut App, screen: Rect, pos: Pos2) {
        let press = |pressed| Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        };
        run_frame(ctx, app, screen, vec![Event::PointerMoved(pos)]);
        run_frame(ctx, app, screen, vec![press(true)]);
        run_frame(ctx, app, screen, vec![press(false)]);
    }

    fn new_app() -> App {
        App::new(GameState::with_seed(5), Theme::Dark)
    }

    mod layout {
        use super::*;

        #[test]
        fn content_fits_default_window() {
            let ctx = Context::default();
            let mut app = new_app();
            let window = screen(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT);

            let (content, _) = run_frame(&ctx, &mut app, window, vec![]);

            assert!(content.max.y <= GUI_WINDOW_HEIGHT - GUI_PADDING + 0.5, "content bottom {}", content.max.y);
        }

        #[test]
        fn content_fits_taller_window() {
            let ctx = Context::default();
            let mut app = new_app();
            let window = screen(400.0, 900.0);

            let (content, _) = run_frame(&ctx, &mut app, window, vec![]);

            assert!(content.max.y <= 900.0 - GUI_PADDING + 0.5, "content bottom {}", content.max.y);
        }

        #[test]
        fn row_hints_add_up_to_total() {
            let rows = [
                GUI_SWATCH_HINT,
                GUI_HEADING_HINT,
                GUI_SLIDERS_HINT,
                GUI_BUTTON_HINT,
                GUI_BUTTON_HINT,
                GUI_FEEDBACK_HINT,
            ];
            let sum: f32 = rows.iter().sum();
            assert!((sum - GUI_HINT_TOTAL).abs() < 1e-6);
        }
    }

    mod interaction {
        use super::*;

        #[test]
        fn submitted_score_is_visible() {
            let ctx = Context::default();
            let mut app = new_app();
            let window = screen(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT);
            app.state.set_current(Color::new(255, 0, 0));
            app.state.submit();

            let (_, output) = run_frame(&ctx, &mut app, window, vec![]);

            let label = text_rect(&output, "Your match is 66.67% accurate!").expect("feedback label drawn");
            assert!(window.contains_rect(label), "label at {label:?}");
        }

        #[test]
        fn start_button_begins_a_round() {
            let ctx = Context::default();
            let mut app = new_app();
            let window = screen(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT);
            let (_, output) = run_frame(&ctx, &mut app, window, vec![]);
            let start = text_rect(&output, "Start").expect("start button drawn");

            click(&ctx, &mut app, window, start.center());

            assert_eq!(app.state.phase(), Phase::Active);
            let (_, output) = run_frame(&ctx, &mut app, window, vec![]);
            assert!(text_rect(&output, ROUND_PROMPT).is_some());
        }

        #[test]
        fn submit_button_shows_the_score() {
            let ctx = Context::default();
            let mut app = new_app();
            let window = screen(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT);
            let (_, output) = run_frame(&ctx, &mut app, window, vec![]);
            let submit = text_rect(&output, "Submit").expect("submit button drawn");

            click(&ctx, &mut app, window, submit.center());

            let (_, output) = run_frame(&ctx, &mut app, window, vec![]);
            assert!(text_rect(&output, "Your match is 100.00% accurate!").is_some());
        }

        #[test]
        fn red_slider_updates_current_color() {
            let ctx = Context::default();
            let mut app = new_app();
            let window = screen(GUI_WINDOW_WIDTH, GUI_WINDOW_HEIGHT);
            let (_, output) = run_frame(&ctx, &mut app, window, vec![]);
            let red = text_rect(&output, "Red").expect("red label drawn");

            // o trilho fica à direita do rótulo, na mesma linha
            let label_end = GUI_PADDING + (GUI_WINDOW_WIDTH - GUI_PADDING * 2.0) * GUI_SLIDER_LABEL_HINT;
            click(&ctx, &mut app, window, pos2(label_end + 100.0, red.center().y));

            assert!(app.state.current().r > 0);
            assert_eq!(app.state.current(), app.sliders);
            assert_eq!(app.state.current().g, 0);
            assert_eq!(app.state.current().b, 0);
        }
    }
}
