use crate::{
    io::ConstantKind,
    tree::{Tree, Tree::*},
};
use std::f64::consts::E;

/// The notation a node is rendered with. Negation, subtraction, division,
/// reciprocals and exponentials are not variants of the tree, so they are
/// recognized from the shapes the builders produce.
enum Form<'a> {
    Constant(f64),
    Variable,
    Negate(&'a Tree),
    Add(&'a Tree, &'a Tree),
    Subtract(&'a Tree, &'a Tree),
    Multiply(&'a Tree, &'a Tree),
    Divide(&'a Tree, &'a Tree),
    Reciprocal(&'a Tree),
    Exp(&'a Tree),
    Pow(&'a Tree, &'a Tree),
    Log(&'a Tree),
    Sin(&'a Tree),
}

fn negated(tree: &Tree) -> Option<&Tree> {
    match tree {
        Product(lhs, rhs) if **lhs == Constant(-1.) => Some(rhs.as_ref()),
        _ => None,
    }
}

fn reciprocated(tree: &Tree) -> Option<&Tree> {
    match tree {
        Power(base, exponent) if **exponent == Constant(-1.) => Some(base.as_ref()),
        _ => None,
    }
}

fn form(tree: &Tree) -> Form<'_> {
    match tree {
        Constant(val) => Form::Constant(*val),
        Variable => Form::Variable,
        Sum(lhs, rhs) => match negated(rhs) {
            Some(rhs) => Form::Subtract(lhs, rhs),
            None => Form::Add(lhs, rhs),
        },
        Product(lhs, rhs) => match (negated(tree), reciprocated(rhs)) {
            (Some(input), _) => Form::Negate(input),
            (None, Some(rhs)) => Form::Divide(lhs, rhs),
            (None, None) => Form::Multiply(lhs, rhs),
        },
        Power(base, exponent) => match (reciprocated(tree), base.as_ref()) {
            (Some(input), _) => Form::Reciprocal(input),
            (None, Constant(val)) if *val == E => Form::Exp(exponent),
            (None, _) => Form::Pow(base, exponent),
        },
        NaturalLog(input) => Form::Log(input),
        Sine(input) => Form::Sin(input),
    }
}

impl Tree {
    /// Produce the latex expression for the tree.
    pub fn to_latex(&self) -> String {
        match form(self) {
            Form::Constant(val) => match ConstantKind::of(val) {
                ConstantKind::Pi => "\\pi".to_string(),
                kind => kind.to_string(),
            },
            Form::Variable => "x".to_string(),
            Form::Negate(input) => format!("-{{{}}}", {
                let ix = input.to_latex();
                match form(input) {
                    Form::Add(..) | Form::Subtract(..) => with_parens(ix),
                    _ => ix,
                }
            }),
            Form::Add(lhs, rhs) => {
                let (lx, rx) = (parens_add_sub(lhs), parens_add_sub(rhs));
                format!("{{{lx}}} + {{{rx}}}")
            }
            Form::Subtract(lhs, rhs) => {
                let (lx, rx) = (parens_add_sub(lhs), parens_add_sub(rhs));
                format!("{{{lx}}} - {{{rx}}}")
            }
            Form::Multiply(lhs, rhs) => {
                let (lx, rx) = (parens_mul(lhs), parens_mul(rhs));
                format!("{{{lx}}}\\cdot{{{rx}}}")
            }
            Form::Divide(lhs, rhs) => {
                let (lx, rx) = (parens_div(lhs), parens_div(rhs));
                format!("\\dfrac{{{lx}}}{{{rx}}}")
            }
            Form::Reciprocal(input) => format!("\\dfrac{{1}}{{{}}}", parens_div(input)),
            Form::Exp(exponent) => format!("e^{{{}}}", {
                let ex = exponent.to_latex();
                match form(exponent) {
                    Form::Constant(_)
                    | Form::Variable
                    | Form::Negate(_)
                    | Form::Log(_)
                    | Form::Sin(_) => ex,
                    _ => with_parens(ex),
                }
            }),
            Form::Pow(base, exponent) => {
                let bx = base.to_latex();
                let bx = match form(base) {
                    Form::Constant(val) if val < 0. => with_parens(bx),
                    Form::Constant(_) | Form::Variable => bx,
                    _ => with_parens(bx),
                };
                let ex = exponent.to_latex();
                let ex = match form(exponent) {
                    Form::Add(..) | Form::Subtract(..) => with_parens(ex),
                    _ => ex,
                };
                format!("{{{bx}}}^{{{ex}}}")
            }
            Form::Log(input) => format!("\\ln\\left({{{}}}\\right)", input.to_latex()),
            Form::Sin(input) => format!("\\sin\\left({{{}}}\\right)", input.to_latex()),
        }
    }
}

/// Latex of a `tree` that is an operand of an addition or subtraction,
/// wrapped in parentheses if necessary.
fn parens_add_sub(tree: &Tree) -> String {
    let latex = tree.to_latex();
    match form(tree) {
        Form::Add(..) | Form::Subtract(..) | Form::Negate(_) => with_parens(latex),
        _ => latex,
    }
}

/// Latex of a `tree` that is an operand of a multiplication, wrapped in
/// parentheses if necessary.
fn parens_mul(tree: &Tree) -> String {
    let latex = tree.to_latex();
    match form(tree) {
        Form::Add(..) | Form::Subtract(..) | Form::Multiply(..) | Form::Negate(_) => {
            with_parens(latex)
        }
        Form::Constant(val) if val < 0. => with_parens(latex),
        _ => latex,
    }
}

/// Latex of a `tree` that is either a numerator or a denominator.
fn parens_div(tree: &Tree) -> String {
    let latex = tree.to_latex();
    match form(tree) {
        Form::Divide(..) => with_parens(latex),
        _ => latex,
    }
}

fn with_parens(latex: String) -> String {
    format!("\\left({latex}\\right)")
}
