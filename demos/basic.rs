//! Walks a drag around the hue wheel and across a palette square, printing
//! the colors a picker would display.
//!
//! Run with `RUST_LOG=trace` to see the core's diagnostics.

use floem::kurbo::{Point, Size, Vec2};
use hsv_picker_core::{
    extract_theme_color, swatch_rows, Drag, DragUpdate, Hsv, PaletteAxis, PaletteSquare, Rgba,
    WheelLayout, WheelRegion,
};

fn report<T: std::fmt::Debug>(update: &DragUpdate<T>, hsv: Hsv) {
    println!(
        "{:?} {:?} at ({:.0}, {:.0}): H {:.1} S {:.1} V {:.1} -> {}",
        update.phase,
        update.target,
        update.position.x,
        update.position.y,
        hsv.h(),
        hsv.s(),
        hsv.v(),
        hsv.to_rgba()
    );
}

fn main() {
    env_logger::init();

    let mut hsv = match Rgba::from_hex("3B82F6") {
        Ok(c) => c.to_hsv(),
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    println!("-- wheel");
    let wheel = WheelLayout::from_size(Size::new(232.0, 232.0));
    let mut drag: Drag<WheelRegion> = Drag::default();
    let press = wheel.center() + Vec2::new(wheel.radius(), 0.0);
    let mut updates: Vec<DragUpdate<WheelRegion>> = Vec::new();
    updates.extend(drag.start(press, wheel.center(), |v| wheel.hit(v)));
    for _ in 0..4 {
        updates.extend(drag.update(Vec2::new(-wheel.radius() / 2.0, wheel.radius() / 2.0)));
    }
    updates.extend(drag.complete());
    for update in &updates {
        hsv = wheel.apply(update.target, hsv, update.position);
        report(update, hsv);
    }

    println!("-- saturation palette");
    let square = PaletteSquare::from_size(Size::new(232.0, 160.0));
    let mut drag: Drag<PaletteAxis> = Drag::default();
    let mut updates = Vec::new();
    updates.extend(drag.start(Point::new(20.0, 20.0), square.center(), |v| {
        square.contains(v).then_some(PaletteAxis::Saturation)
    }));
    updates.extend(drag.update(Vec2::new(100.0, 60.0)));
    updates.extend(drag.complete());
    for update in &updates {
        hsv = square.delta(update.target, hsv, update.position);
        report(update, hsv);
    }

    println!("-- swatches");
    for row in swatch_rows().iter().take(3) {
        let hexes: Vec<String> = row.colors.iter().map(|c| c.to_hex()).collect();
        println!("{}: {}", row.base, hexes.join(" "));
    }

    let pixels: Vec<Rgba> = swatch_rows().into_iter().flat_map(|row| row.colors).collect();
    println!("-- theme color of all swatches: {}", extract_theme_color(&pixels));
}
