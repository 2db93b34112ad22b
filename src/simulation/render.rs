use crate::simulation::SimulationEngine;

pub const EMPTY: char = '.';
pub const FOOD: char = '*';
pub const SEARCHING: char = 'a';
pub const CARRYING: char = 'A';
pub const NEST: char = 'N';

/// Draw the grid as text, one line per row.
/// Ants cover food, the nest covers everything.
pub fn render_text(engine: &SimulationEngine) -> String {
    let grid = engine.grid();
    let w = grid.width();
    let mut cells = vec![EMPTY; grid.len()];

    for pile in engine.food().piles() {
        cells[grid.index(pile.cell)] = FOOD;
    }
    for ant in engine.ants() {
        let glyph = if ant.is_carrying() { CARRYING } else { SEARCHING };
        cells[grid.index(ant.pos())] = glyph;
    }
    cells[grid.index(engine.nest())] = NEST;

    let mut out = String::with_capacity(grid.len() + grid.height());
    for row in cells.chunks(w) {
        out.extend(row);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimParams;
    use crate::world::{Cell, FoodPile};

    #[test]
    fn test_render_layout() {
        let engine = SimulationEngine::with_piles(
            5,
            3,
            1,
            1,
            SimParams::default(),
            &[FoodPile {
                cell: Cell::new(0, 0),
                amount: 4,
            }],
        )
        .unwrap();

        let text = render_text(&engine);
        assert_eq!(text, "*....\n..N..\n.....\n");
    }

    #[test]
    fn test_render_shows_ants() {
        let mut engine =
            SimulationEngine::with_piles(7, 7, 3, 2, SimParams::default(), &[]).unwrap();
        engine.advance();

        let text = render_text(&engine);
        assert_eq!(text.lines().count(), 7);
        assert!(text.lines().all(|l| l.len() == 7));
        assert!(text.contains(SEARCHING));
        assert_eq!(text.matches(NEST).count(), 1);
    }
}
