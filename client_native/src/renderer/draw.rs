use std::convert::Infallible;

use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Line, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment,
};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use game_core::{Config, PongMatch, Rect, Side};

use super::{
    Framebuffer, Scaled, Scene, BACKGROUND, BUTTON_FONT, FOREGROUND, HOVER_OUTLINE,
    OVERLAY_ALPHA, PROMPT_SCALE, SCORE_SCALE, TITLE_SCALE,
};
use crate::menu::{MenuButton, MenuLayout};

const TITLE: &str = "PONG";
const PROMPT: &str = "Game over? (y/n)";

pub fn draw_scene(
    fb: &mut Framebuffer<'_>,
    scene: Scene<'_>,
    menu: &MenuLayout,
) -> Result<(), Infallible> {
    match scene {
        Scene::Menu { hovered } => draw_menu(fb, menu, hovered),
        Scene::Match(game) => draw_match(fb, game),
        Scene::GameOver(game) => {
            draw_match(fb, game)?;
            draw_game_over(fb, &game.config)
        }
    }
}

pub fn draw_menu<D>(
    target: &mut D,
    menu: &MenuLayout,
    hovered: Option<MenuButton>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    target.clear(BACKGROUND)?;

    let title_anchor = Point::new(menu.center_x as i32, menu.title_top as i32);
    draw_text(target, TITLE, title_anchor, TITLE_SCALE, Alignment::Center, Baseline::Top)?;

    let outline = PrimitiveStyleBuilder::new()
        .stroke_color(HOVER_OUTLINE)
        .stroke_width(2)
        .stroke_alignment(StrokeAlignment::Inside)
        .build();

    for (button, rect) in menu.buttons() {
        if hovered == Some(button) {
            to_rectangle(&rect.inflate(20.0, 10.0))
                .into_styled(outline)
                .draw(target)?;
        }
        let center = rect.center();
        let anchor = Point::new(center.x.round() as i32, center.y.round() as i32);
        let style = MonoTextStyle::new(&BUTTON_FONT, FOREGROUND);
        let text_style = TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build();
        Text::with_text_style(button.label(), anchor, style, text_style).draw(target)?;
    }

    Ok(())
}

pub fn draw_match<D>(target: &mut D, game: &PongMatch) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let config = &game.config;
    let (width, height) = (config.arena_width as i32, config.arena_height as i32);
    let fill = PrimitiveStyle::with_fill(FOREGROUND);

    target.clear(BACKGROUND)?;

    // Center line
    Line::new(Point::new(width / 2, 0), Point::new(width / 2, height - 1))
        .into_styled(PrimitiveStyle::with_stroke(FOREGROUND, 1))
        .draw(target)?;

    for side in [Side::Left, Side::Right] {
        if let Some(paddle) = game.paddle(side) {
            to_rectangle(&paddle.rect).into_styled(fill).draw(target)?;
        }
    }

    if let Some(ball) = game.ball() {
        to_rectangle(&ball.rect).into_styled(fill).draw(target)?;
    }

    draw_text(
        target,
        &game.score.get(Side::Left).to_string(),
        Point::new(width / 4, 30),
        SCORE_SCALE,
        Alignment::Left,
        Baseline::Top,
    )?;
    draw_text(
        target,
        &game.score.get(Side::Right).to_string(),
        Point::new(width * 3 / 4, 30),
        SCORE_SCALE,
        Alignment::Right,
        Baseline::Top,
    )?;

    Ok(())
}

/// Overlay the prompt on whatever frame is already in the buffer
pub fn draw_game_over(fb: &mut Framebuffer<'_>, config: &Config) -> Result<(), Infallible> {
    fb.dim(OVERLAY_ALPHA);
    let center = config.center();
    draw_text(
        fb,
        PROMPT,
        Point::new(center.x as i32, center.y as i32),
        PROMPT_SCALE,
        Alignment::Center,
        Baseline::Middle,
    )
}

/// Draw one line of text, blown up by `scale`. `anchor` is in screen pixels.
fn draw_text<D>(
    target: &mut D,
    text: &str,
    anchor: Point,
    scale: u32,
    alignment: Alignment,
    baseline: Baseline,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb888>,
{
    let style = MonoTextStyle::new(&FONT_10X20, FOREGROUND);
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(baseline)
        .build();
    let s = scale.max(1) as i32;
    let mut scaled = Scaled::new(target, scale);
    Text::with_text_style(text, anchor / s, style, text_style).draw(&mut scaled)?;
    Ok(())
}

fn to_rectangle(rect: &Rect) -> Rectangle {
    Rectangle::new(
        Point::new(rect.left().round() as i32, rect.top().round() as i32),
        Size::new(rect.size.x.round() as u32, rect.size.y.round() as u32),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::GameRng;

    const W: u32 = 800;
    const H: u32 = 600;

    fn frame() -> Vec<u8> {
        vec![0u8; (W * H * 4) as usize]
    }

    fn count_color(
        fb: &Framebuffer<'_>,
        xs: std::ops::Range<u32>,
        ys: std::ops::Range<u32>,
        color: Rgb888,
    ) -> usize {
        let mut n = 0;
        for y in ys {
            for x in xs.clone() {
                if fb.pixel(x, y) == Some(color) {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn test_menu_draws_title_and_hover() {
        let menu = MenuLayout::new(&Config::new());
        let mut buf = frame();
        let mut fb = Framebuffer::new(&mut buf, W, H);

        draw_menu(&mut fb, &menu, Some(MenuButton::Start)).unwrap();

        assert!(
            count_color(&fb, 340..460, 150..210, FOREGROUND) > 0,
            "Title glyphs below y=150"
        );
        assert_eq!(count_color(&fb, 0..W, 0..150, FOREGROUND), 0);
        // Outline around START is 70x30 centred on (400, 270)
        assert_eq!(fb.pixel(365, 270), Some(HOVER_OUTLINE));
        assert_eq!(fb.pixel(434, 270), Some(HOVER_OUTLINE));
        assert_eq!(fb.pixel(365, 330), Some(BACKGROUND), "QUIT not hovered");
        assert!(count_color(&fb, 375..425, 260..280, FOREGROUND) > 0);
        assert!(count_color(&fb, 380..420, 320..340, FOREGROUND) > 0);
    }

    #[test]
    fn test_menu_without_hover_has_no_outline() {
        let menu = MenuLayout::new(&Config::new());
        let mut buf = frame();
        let mut fb = Framebuffer::new(&mut buf, W, H);

        draw_menu(&mut fb, &menu, None).unwrap();

        assert_eq!(count_color(&fb, 0..W, 0..H, HOVER_OUTLINE), 0);
    }

    #[test]
    fn test_match_frame() {
        let game = PongMatch::new(Config::new(), GameRng::new(9));
        let mut buf = frame();
        let mut fb = Framebuffer::new(&mut buf, W, H);

        draw_match(&mut fb, &game).unwrap();

        assert_eq!(fb.pixel(400, 5), Some(FOREGROUND), "Center line");
        assert_eq!(fb.pixel(400, 300), Some(FOREGROUND), "Ball");
        assert_eq!(fb.pixel(37, 300), Some(FOREGROUND), "Left paddle");
        assert_eq!(fb.pixel(762, 300), Some(FOREGROUND), "Right paddle");
        assert_eq!(fb.pixel(100, 500), Some(BACKGROUND));
        assert!(count_color(&fb, 200..220, 30..70, FOREGROUND) > 0, "Left score");
        assert!(count_color(&fb, 580..600, 30..70, FOREGROUND) > 0, "Right score");
    }

    #[test]
    fn test_game_over_dims_match_frame() {
        let game = PongMatch::new(Config::new(), GameRng::new(9));
        let mut buf = frame();
        let mut fb = Framebuffer::new(&mut buf, W, H);

        draw_scene(&mut fb, Scene::GameOver(&game), &MenuLayout::new(&game.config)).unwrap();

        let dimmed = Rgb888::new(75, 75, 75);
        assert_eq!(fb.pixel(37, 300), Some(dimmed));
        assert_eq!(fb.pixel(400, 5), Some(dimmed));
        assert!(
            count_color(&fb, 240..560, 280..320, FOREGROUND) > 0,
            "Prompt text drawn on top"
        );
    }
}
