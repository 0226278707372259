use crate::catalog::{BaseOperator, Modifier, OperatorCatalog, OperatorToken};
use crate::iterator::{AssignmentIterator, CandidateIterator};
use crate::template::TemplateSet;

fn token(base: BaseOperator) -> OperatorToken {
    OperatorToken::new(base, Modifier::None)
}

#[test]
fn assignments_cover_cartesian_power() {
    let catalog = OperatorCatalog::standard();
    assert_eq!(AssignmentIterator::total(&catalog), 3375);
    assert_eq!(AssignmentIterator::new(&catalog).count(), 3375);
}

#[test]
fn assignments_vary_last_slot_fastest() {
    let add = token(BaseOperator::Add);
    let mul = token(BaseOperator::Mul);
    let catalog = match OperatorCatalog::new(vec![add, mul]) {
        Ok(c) => c,
        Err(e) => panic!("{}", e),
    };
    let all: Vec<_> = AssignmentIterator::new(&catalog).collect();
    assert_eq!(
        all,
        vec![
            [add, add, add],
            [add, add, mul],
            [add, mul, add],
            [add, mul, mul],
            [mul, add, add],
            [mul, add, mul],
            [mul, mul, add],
            [mul, mul, mul],
        ]
    );
}

#[test]
fn standard_assignment_order_starts_and_ends_as_expected() {
    let catalog = OperatorCatalog::standard();
    let mut it = AssignmentIterator::new(&catalog);
    let add = token(BaseOperator::Add);
    assert_eq!(it.next(), Some([add, add, add]));
    assert_eq!(it.next(), Some([add, add, token(BaseOperator::Sub)]));

    let last = AssignmentIterator::new(&catalog).last();
    let sqrt_mod = OperatorToken::new(BaseOperator::Mod, Modifier::Sqrt);
    assert_eq!(last, Some([sqrt_mod, sqrt_mod, sqrt_mod]));
}

#[test]
fn first_assignment_yields_every_template_in_order() {
    let catalog = OperatorCatalog::standard();
    let templates = TemplateSet::standard();
    let first: Vec<_> = CandidateIterator::new([1, 2, 3, 4], &catalog, &templates)
        .take_while(|c| c.assignment == [token(BaseOperator::Add); 3])
        .map(|c| c.template_index)
        .collect();
    assert_eq!(first, (0..15).collect::<Vec<_>>());
}

#[test]
fn equality_slot_duplicates_are_skipped() {
    let catalog = OperatorCatalog::standard();
    let templates = TemplateSet::standard();
    let candidates: Vec<_> = CandidateIterator::new([1, 2, 3, 4], &catalog, &templates).collect();

    // Each template sees catalog.len()^2 assignments with the first token in its equality slot
    assert_eq!(candidates.len(), 15 * 15 * 15);

    let first_token = token(BaseOperator::Add);
    for candidate in &candidates {
        let template = templates.get(candidate.template_index);
        assert!(template.is_some());
        if let Some(t) = template {
            assert_eq!(candidate.assignment[t.equals_slot()], first_token);
        }
    }
}

#[test]
fn candidates_carry_instantiated_equations() {
    let catalog = OperatorCatalog::standard();
    let templates = TemplateSet::standard();
    let mut it = CandidateIterator::new([1, 2, 3, 4], &catalog, &templates);
    let first = it.next();
    assert!(first.is_some());
    if let Some(c) = first {
        assert_eq!(c.equation.to_string(), "1==2+3+4");
    }
}
