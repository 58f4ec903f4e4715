use rand::seq::index::sample;
use rand::Rng;

/// Creates a random board with exactly one start and one goal.
///
/// Every other cell is a wall with probability `wall_density`.
pub fn generate_board<R: Rng>(
    rng: &mut R,
    width: usize,
    height: usize,
    wall_density: f64,
) -> anyhow::Result<String> {
    let num_cells = width
        .checked_mul(height)
        .ok_or_else(|| anyhow::anyhow!("Board of {}x{} cells is too large", width, height))?;
    if num_cells < 2 {
        anyhow::bail!("A board needs at least two cells, got {}x{}", width, height);
    }
    if !(0.0..=1.0).contains(&wall_density) {
        anyhow::bail!("Wall density must be between 0 and 1, got {}", wall_density);
    }

    let mut cells: Vec<char> = (0..num_cells)
        .map(|_| if rng.gen_bool(wall_density) { 'B' } else { '.' })
        .collect();
    let markers = sample(rng, num_cells, 2);
    cells[markers.index(0)] = 'S';
    cells[markers.index(1)] = 'X';

    let rows: Vec<String> = cells
        .chunks(width)
        .map(|row| row.iter().collect())
        .collect();
    Ok(rows.join("\n"))
}
