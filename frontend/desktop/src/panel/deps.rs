use super::ControlId;

pub type Recompute<P> = fn(&mut P);

struct Rule<P> {
    governors: Vec<ControlId>,
    apply: Recompute<P>,
}

/// Rules recomputing dependent control state, keyed by the controls that govern them.
pub struct DependencyGraph<P> {
    rules: Vec<Rule<P>>,
}

impl<P> DependencyGraph<P> {
    pub fn new() -> Self {
        DependencyGraph { rules: Vec::new() }
    }

    pub fn add(&mut self, governors: &[ControlId], apply: Recompute<P>) {
        self.rules.push(Rule {
            governors: governors.to_vec(),
            apply,
        });
    }

    /// Every rule governed by `id`, in registration order.
    pub fn affected_by(&self, id: ControlId) -> Vec<Recompute<P>> {
        self.rules
            .iter()
            .filter(|rule| rule.governors.contains(&id))
            .map(|rule| rule.apply)
            .collect()
    }

    pub fn all(&self) -> Vec<Recompute<P>> {
        self.rules.iter().map(|rule| rule.apply).collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl<P> Default for DependencyGraph<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_run_in_registration_order() {
        let mut graph = DependencyGraph::<Vec<u8>>::new();
        graph.add(&[ControlId("a")], |log| log.push(1));
        graph.add(&[ControlId("b")], |log| log.push(2));
        graph.add(&[ControlId("a"), ControlId("b")], |log| log.push(3));

        let mut log = Vec::new();
        for apply in graph.affected_by(ControlId("a")) {
            apply(&mut log);
        }
        assert_eq!(log, [1, 3]);
        assert!(graph.affected_by(ControlId("c")).is_empty());
        assert_eq!(graph.all().len(), 3);
    }
}
