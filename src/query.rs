// Query formatting: coefficients are substituted as-is into one of three
// natural-language templates understood by the Short Answers API.

use crate::input::Coefficient;

/// The three equation shapes the menu can solve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EquationKind {
    Quadratic,
    TwoUnknowns,
    ThreeUnknowns,
}

impl EquationKind {
    /// Coefficient names in the order the user is prompted for them.
    pub fn coefficient_names(self) -> &'static [&'static str] {
        match self {
            EquationKind::Quadratic => &["a", "b", "c"],
            EquationKind::TwoUnknowns => &["a1", "b1", "c1", "a2", "b2", "c2"],
            EquationKind::ThreeUnknowns => &[
                "a1", "b1", "c1", "d1", "a2", "b2", "c2", "d2", "a3", "b3", "c3", "d3",
            ],
        }
    }

    /// Prompt shown for a single coefficient.
    pub fn prompt_for(self, name: &str) -> String {
        match self {
            EquationKind::Quadratic => format!("Enter coefficient {}", name),
            _ => format!("Enter {}", name),
        }
    }

    /// Line printed before the systems' coefficient prompts.
    pub fn form_hint(self) -> Option<&'static str> {
        match self {
            EquationKind::Quadratic => None,
            EquationKind::TwoUnknowns => {
                Some("Enter coefficients for the equations in the form a1*x + b1*y = c1:")
            }
            EquationKind::ThreeUnknowns => {
                Some("Enter coefficients for the equations in the form a1*x + b1*y + c1*z = d1:")
            }
        }
    }

    /// Build the query from a flat list in prompt order. Returns `None` when
    /// the number of coefficients does not fit the shape.
    pub fn build_query(self, c: &[Coefficient]) -> Option<String> {
        match (self, c) {
            (EquationKind::Quadratic, [a, b, cc]) => Some(quadratic(a, b, cc)),
            (EquationKind::TwoUnknowns, [a1, b1, c1, a2, b2, c2]) => Some(two_unknowns(&[
                [a1.clone(), b1.clone(), c1.clone()],
                [a2.clone(), b2.clone(), c2.clone()],
            ])),
            (EquationKind::ThreeUnknowns, [a1, b1, c1, d1, a2, b2, c2, d2, a3, b3, c3, d3]) => {
                Some(three_unknowns(&[
                    [a1.clone(), b1.clone(), c1.clone(), d1.clone()],
                    [a2.clone(), b2.clone(), c2.clone(), d2.clone()],
                    [a3.clone(), b3.clone(), c3.clone(), d3.clone()],
                ]))
            }
            _ => None,
        }
    }
}

/// `solve {a}x^2 + {b}x + {c} = 0`
pub fn quadratic(a: &Coefficient, b: &Coefficient, c: &Coefficient) -> String {
    format!("solve {}x^2 + {}x + {} = 0", a, b, c)
}

/// Each row is `[a, b, c]` for `a*x + b*y = c`.
pub fn two_unknowns(rows: &[[Coefficient; 3]; 2]) -> String {
    let eqs: Vec<String> = rows
        .iter()
        .map(|[a, b, c]| format!("{}x + {}y = {}", a, b, c))
        .collect();
    format!("solve {{ {} }} for x, y", eqs.join(", "))
}

/// Each row is `[a, b, c, d]` for `a*x + b*y + c*z = d`.
pub fn three_unknowns(rows: &[[Coefficient; 4]; 3]) -> String {
    let eqs: Vec<String> = rows
        .iter()
        .map(|[a, b, c, d]| format!("{}x + {}y + {}z = {}", a, b, c, d))
        .collect();
    format!("solve {{ {} }} for x, y, z", eqs.join(", "))
}
