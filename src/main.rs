use bezier_traversal::{CurveTraversal, RepeatMode};

fn main() {
    let mut bezier = CurveTraversal::new(40.0, 20.0, 150.0, 600.0, 300.0, 0.0, 600.0, 460.0);
    if let Err(err) = bezier.create_point_data(100) {
        eprintln!("{err}");
        std::process::exit(1);
    }
    bezier.set_repeat_mode(RepeatMode::Loop);

    println!("Traversing...");
    for frame in 0..250 {
        let heading = bezier.direction_radian();
        let point = match bezier.next_point() {
            Ok(point) => point,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        };
        println!(
            "frame {:>3}: ({:>7.2}, {:>7.2}) heading {:>6.1}°",
            frame,
            point.x,
            point.y,
            heading.to_degrees()
        );
    }
}
