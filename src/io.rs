use crate::tree::{Tree, Tree::*};
use std::{
    f64::consts::{E, PI},
    fmt::{self, Display, Formatter},
};

/// Constants within this distance of an integer are rendered as that integer.
pub const INTEGER_TOLERANCE: f64 = 1e-4;

/// How a constant is rendered.
pub(crate) enum ConstantKind {
    Pi,
    Euler,
    Integer(f64),
    Decimal(f64),
}

impl ConstantKind {
    pub(crate) fn of(val: f64) -> ConstantKind {
        if val == PI {
            ConstantKind::Pi
        } else if val == E {
            ConstantKind::Euler
        } else if f64::abs(val.round() - val) < INTEGER_TOLERANCE {
            // Adding zero turns negative zero into zero, so it prints as "0".
            ConstantKind::Integer(val.round() + 0.)
        } else {
            ConstantKind::Decimal(val)
        }
    }
}

impl Display for ConstantKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConstantKind::Pi => write!(f, "pi"),
            ConstantKind::Euler => write!(f, "e"),
            ConstantKind::Integer(val) | ConstantKind::Decimal(val) => write!(f, "{}", val),
        }
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Constant(val) => write!(f, "{}", ConstantKind::of(*val)),
            Variable => write!(f, "x"),
            Sum(lhs, rhs) => write!(f, "({} + {})", lhs, rhs),
            Product(lhs, rhs) => write!(f, "({} * {})", lhs, rhs),
            Power(base, exponent) => write!(f, "({}^{})", base, exponent),
            NaturalLog(input) => write!(f, "ln({})", input),
            Sine(input) => write!(f, "sin({})", input),
        }
    }
}

impl Tree {
    /**
    Render this tree as a diagram, with one node per line and the children
    of every node indented below it:

    ```text
    Sum
     ├── Product
     │    ├── Constant(2)
     │    └── Variable
     └── Sine
          └── Variable
    ```
    */
    pub fn diagram(&self) -> String {
        let mut out = String::new();
        self.write_diagram(&mut out, &mut String::new());
        out
    }

    fn write_diagram(&self, out: &mut String, indent: &mut String) {
        match self {
            Constant(val) => out.push_str(&format!("Constant({})", ConstantKind::of(*val))),
            Variable => out.push_str("Variable"),
            Sum(..) => out.push_str("Sum"),
            Product(..) => out.push_str("Product"),
            Power(..) => out.push_str("Power"),
            NaturalLog(_) => out.push_str("NaturalLog"),
            Sine(_) => out.push_str("Sine"),
        }
        out.push('\n');
        let children = self.children();
        for (i, child) in children.iter().enumerate() {
            let last = i + 1 == children.len();
            out.push_str(indent);
            out.push_str(if last { " └── " } else { " ├── " });
            let len = indent.len();
            indent.push_str(if last { "     " } else { " │   " });
            child.write_diagram(out, indent);
            indent.truncate(len);
        }
    }
}
