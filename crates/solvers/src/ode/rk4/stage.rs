use kutta_core::{DerivativeSystem, State};

use super::FourthStage;

/// Advances `(y, z)` by one RK4 step of size `h` from `state`.
///
/// Returns the new `(y, z)`; the caller sets `x`.
pub fn advance<S>(system: &S, state: &State, h: f64, fourth_stage: FourthStage) -> (f64, f64)
where
    S: DerivativeSystem + ?Sized,
{
    let State { x, y, z } = *state;
    let mid = x + 0.5 * h;

    let k1 = h * system.dy(x, y, z);
    let l1 = h * system.dz(x, y, z);

    let (y2, z2) = (y + 0.5 * k1, z + 0.5 * l1);
    let k2 = h * system.dy(mid, y2, z2);
    let l2 = h * system.dz(mid, y2, z2);

    let (y3, z3) = (y + 0.5 * k2, z + 0.5 * l2);
    let k3 = h * system.dy(mid, y3, z3);
    let l3 = h * system.dz(mid, y3, z3);

    let (y4, z4) = match fourth_stage {
        FourthStage::FromSecondStage => (y + k2, z + l2),
        FourthStage::FromThirdStage => (y + k3, z + l3),
    };
    let k4 = h * system.dy(x + h, y4, z4);
    let l4 = h * system.dz(x + h, y4, z4);

    (
        y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0,
        z + (l1 + 2.0 * l2 + 2.0 * l3 + l4) / 6.0,
    )
}
