#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesStage {
    Enumerating,
    BuildingGraph,
    ComputingIndices,
    Completed,
}

impl SeriesStage {
    pub fn label(self) -> &'static str {
        match self {
            SeriesStage::Enumerating => "enumerating group",
            SeriesStage::BuildingGraph => "building power graph",
            SeriesStage::ComputingIndices => "computing indices",
            SeriesStage::Completed => "completed",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeriesProgressEvent {
    pub k: u32,
    pub k_max: u32,
    pub stage: SeriesStage,
    pub elapsed_wall_s: f64,
    pub message: Option<String>,
}

impl SeriesProgressEvent {
    pub fn stage(
        k: u32,
        k_max: u32,
        stage: SeriesStage,
        elapsed_wall_s: f64,
        message: Option<String>,
    ) -> Self {
        Self {
            k,
            k_max,
            stage,
            elapsed_wall_s,
            message,
        }
    }

    /// Fraction of exponents finished, counting the current one once completed.
    pub fn fraction_complete(&self) -> f64 {
        if self.k_max == 0 {
            return 1.0;
        }
        let done = match self.stage {
            SeriesStage::Completed => self.k,
            _ => self.k.saturating_sub(1),
        };
        done as f64 / self.k_max as f64
    }
}
