use super::SlotAssignment;

/// Accumule les résultats dans l'ordre de génération des créneaux.
#[derive(Debug, Default)]
pub struct SlotCollector {
    results: Vec<SlotAssignment>,
}

impl SlotCollector {
    pub fn with_capacity(slots: usize) -> Self {
        Self {
            results: Vec::with_capacity(slots),
        }
    }

    pub fn push(&mut self, result: SlotAssignment) {
        self.results.push(result);
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn finish(self) -> Vec<SlotAssignment> {
        self.results
    }
}
