use rand::SeedableRng;
use rand::rngs::StdRng;

use termlife::grid::Grid;
use termlife::render::Renderer;
use termlife::simulation::Simulation;

#[test]
fn blinker_frames() {
    let mut grid = Grid::new(3, 5);
    for c in 1..=3 {
        grid.set_alive(1, c);
    }

    let mut sim = Simulation::from_grid(grid, StdRng::seed_from_u64(1));
    let mut renderer = Renderer::new('#', '.');

    insta::assert_snapshot!(renderer.render(&sim.frame()), @r"
    Generation 1 | live cells: 3
    .....
    .###.
    .....
    ");

    sim.step();

    insta::assert_snapshot!(renderer.render(&sim.frame()), @r"
    Generation 2 | live cells: 3
    ..#..
    ..#..
    ..#..
    ");
}

#[test]
fn extinct_frame() {
    let mut grid = Grid::new(2, 4);
    grid.set_alive(0, 0);

    let mut sim = Simulation::from_grid(grid, StdRng::seed_from_u64(1));
    sim.step();

    let mut renderer = Renderer::new('o', '-');

    insta::assert_snapshot!(renderer.render(&sim.frame()), @r"
    Generation 2 | live cells: 0
    ----
    ----
    ");
}
