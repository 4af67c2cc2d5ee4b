// demos/billiards.rs
//
// Headless run of the sandbox: populate a table, let it settle, then apply a
// cue stroke and watch the energy budget. A real host would call the same
// four entry points from its frame loop and draw the snapshots.

use rs_billiards::apis::billiards::BilliardsTable;
use rs_billiards::utils::SimulationError;

fn main() -> Result<(), SimulationError> {
    env_logger::init();

    let mut table = BilliardsTable::new()?;
    println!("Racked {} balls", table.ball_count());
    println!("Initial kinetic energy: {:.2} J", table.total_kinetic_energy());

    // let the break settle; friction drains the random initial velocities
    for _ in 0..240 {
        table.tick();
    }
    println!("After settling: {:.2} J", table.total_kinetic_energy());

    // drag from the center of the table toward the upper right
    table.pointer_press(0.0, 0.0)?;
    table.pointer_release(120.0, 80.0)?;
    println!("Struck the ball nearest the center");

    for frame in 0..240 {
        table.tick();
        if frame % 60 == 0 {
            let momentum = table.total_momentum();
            println!(
                "frame {:>3}: energy {:>8.2} J, momentum ({:>7.2}, {:>7.2})",
                frame,
                table.total_kinetic_energy(),
                momentum.x,
                momentum.y
            );
        }
    }

    let snapshots = table.snapshots();
    if let Some(snapshot) = snapshots.first() {
        println!(
            "First ball rests at ({:.1}, {:.1}), radius {}",
            snapshot.position.x, snapshot.position.y, snapshot.radius
        );
    }

    Ok(())
}
