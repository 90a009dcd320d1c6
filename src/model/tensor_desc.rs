#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TensorDesc {
    // Biases
    Vector { length: usize },

    // Dense layer weights, row-major
    Matrix { rows: usize, cols: usize },
}

impl TensorDesc {
    pub fn new_vector(length: usize) -> Self {
        Self::Vector { length }
    }

    pub fn new_matrix(rows: usize, cols: usize) -> Self {
        Self::Matrix { rows, cols }
    }

    pub fn size_in_bytes(&self) -> usize {
        self.num_elements().saturating_mul(std::mem::size_of::<f32>())
    }

    /// Element count, saturating at `usize::MAX` for unrepresentable shapes.
    pub fn num_elements(&self) -> usize {
        self.checked_num_elements().unwrap_or(usize::MAX)
    }

    pub fn checked_num_elements(&self) -> Option<usize> {
        match self {
            Self::Vector { length } => Some(*length),
            Self::Matrix { rows, cols } => rows.checked_mul(*cols),
        }
    }

    pub fn to_dims(&self) -> Vec<usize> {
        match self {
            Self::Vector { length } => vec![*length],
            Self::Matrix { rows, cols } => vec![*rows, *cols],
        }
    }

    /// `3×2` style label used in model summaries.
    pub fn dims_label(&self) -> String {
        self.to_dims()
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("×")
    }
}
