use super::{Cost, LocationId, TollError};

/// a square matrix of costs between toll locations.
///
/// rows and columns share one index: the ascending, de-duplicated list of
/// location ids. cells are stored densely in row-major order, so lookups by
/// id cost a binary search over the index and lookups by position are direct.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    locations: Vec<LocationId>,
    cells: Vec<Cost>,
}

impl DistanceMatrix {
    /// creates a matrix with a zero diagonal where every other pair is unreachable.
    ///
    /// `locations` must be strictly ascending.
    pub fn disconnected(locations: Vec<LocationId>) -> Result<DistanceMatrix, TollError> {
        validate_index(&locations)?;
        let size = locations.len();
        let mut cells = vec![Cost::Unreachable; size * size];
        for i in 0..size {
            cells[i * size + i] = Cost::ZERO;
        }
        Ok(DistanceMatrix { locations, cells })
    }

    /// creates a matrix from explicit rows, one per location, each with one
    /// cell per location.
    ///
    /// # Errors
    ///
    /// * [`TollError::ShapeMismatch`] if the number of rows differs from the number of locations
    /// * [`TollError::RaggedRow`] if any row has the wrong number of cells
    /// * [`TollError::InvalidInput`] if `locations` is not strictly ascending
    pub fn from_rows(
        locations: Vec<LocationId>,
        rows: Vec<Vec<Cost>>,
    ) -> Result<DistanceMatrix, TollError> {
        let size = locations.len();
        if rows.len() != size {
            return Err(TollError::ShapeMismatch {
                rows: rows.len(),
                columns: size,
            });
        }
        if let Some((row, found)) = rows
            .iter()
            .enumerate()
            .find(|(_, r)| r.len() != size)
            .map(|(idx, r)| (idx, r.len()))
        {
            return Err(TollError::RaggedRow {
                row,
                expected: size,
                found,
            });
        }
        validate_index(&locations)?;
        let cells = rows.into_iter().flatten().collect();
        Ok(DistanceMatrix { locations, cells })
    }

    /// number of locations along each axis
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    pub fn locations(&self) -> &[LocationId] {
        &self.locations
    }

    /// position of a location along either axis
    pub fn index_of(&self, id: LocationId) -> Option<usize> {
        self.locations.binary_search(&id).ok()
    }

    /// cost from location `from` to location `to`, or `None` if either is not
    /// in this matrix.
    pub fn get(&self, from: LocationId, to: LocationId) -> Option<Cost> {
        let i = self.index_of(from)?;
        let j = self.index_of(to)?;
        Some(self.get_by_index(i, j))
    }

    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get_by_index(&self, i: usize, j: usize) -> Cost {
        self.cells[i * self.size() + j]
    }

    pub(crate) fn set_by_index(&mut self, i: usize, j: usize, cost: Cost) {
        let size = self.size();
        self.cells[i * size + j] = cost;
    }

    /// the cells of row `i`
    pub fn row(&self, i: usize) -> &[Cost] {
        let size = self.size();
        &self.cells[i * size..(i + 1) * size]
    }

    /// iterates over each row along with its location id
    pub fn rows(&self) -> impl Iterator<Item = (LocationId, &[Cost])> + '_ {
        self.locations.iter().copied().enumerate().map(|(i, id)| (id, self.row(i)))
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [Cost] {
        &mut self.cells
    }

    /// true if cell (i, j) equals cell (j, i) for every pair
    pub fn is_symmetric(&self) -> bool {
        let size = self.size();
        (0..size).all(|i| ((i + 1)..size).all(|j| self.get_by_index(i, j) == self.get_by_index(j, i)))
    }

    /// applies `op` to every cell, producing a new matrix over the same index
    pub fn map_cells<F>(&self, op: F) -> DistanceMatrix
    where
        F: Fn(Cost) -> Cost,
    {
        DistanceMatrix {
            locations: self.locations.clone(),
            cells: self.cells.iter().map(|c| op(*c)).collect(),
        }
    }
}

fn validate_index(locations: &[LocationId]) -> Result<(), TollError> {
    match locations.windows(2).find(|pair| pair[0] >= pair[1]) {
        Some(pair) => Err(TollError::InvalidInput(format!(
            "matrix locations must be strictly ascending, found {} before {}",
            pair[0], pair[1]
        ))),
        None => Ok(()),
    }
}
