use crate::catalog::{BaseOperator, CatalogError, Modifier, OperatorCatalog, OperatorToken};
use crate::expression::Expression;

#[test]
fn test_standard_catalog_order() {
    let catalog = OperatorCatalog::standard();
    assert_eq!(catalog.len(), 15);
    assert_eq!(
        catalog.get(0),
        Some(OperatorToken::new(BaseOperator::Add, Modifier::None))
    );
    assert_eq!(
        catalog.get(4),
        Some(OperatorToken::new(BaseOperator::Mod, Modifier::None))
    );
    assert_eq!(
        catalog.get(5),
        Some(OperatorToken::new(BaseOperator::Add, Modifier::Factorial))
    );
    assert_eq!(
        catalog.get(14),
        Some(OperatorToken::new(BaseOperator::Mod, Modifier::Sqrt))
    );
    assert_eq!(catalog.get(15), None);
}

#[test]
fn test_standard_catalog_is_stable() {
    assert_eq!(OperatorCatalog::standard(), OperatorCatalog::standard());
}

#[test]
fn test_empty_catalog_rejected() {
    assert_eq!(
        OperatorCatalog::new(Vec::new()),
        Err(CatalogError::EmptyCatalog)
    );
}

#[test]
fn test_precedence() {
    assert!(BaseOperator::Mul.precedence() > BaseOperator::Add.precedence());
    assert_eq!(
        BaseOperator::Mod.precedence(),
        BaseOperator::Div.precedence()
    );
    assert_eq!(
        BaseOperator::Sub.precedence(),
        BaseOperator::Add.precedence()
    );
}

#[test]
fn test_modifier_apply() {
    let two = Expression::Number(2.0);
    assert_eq!(Modifier::None.apply(two.clone()), two);
    assert_eq!(
        Modifier::Factorial.apply(two.clone()).to_string(),
        "factorial(2)"
    );
    assert_eq!(Modifier::Sqrt.apply(two).to_string(), "sqrt(2)");
}

#[test]
fn test_token_display() {
    assert_eq!(
        OperatorToken::new(BaseOperator::Div, Modifier::None).to_string(),
        "/"
    );
    assert_eq!(
        OperatorToken::new(BaseOperator::Sub, Modifier::Sqrt).to_string(),
        "sqrt(_)-"
    );
}
