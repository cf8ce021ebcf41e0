//! Box-versus-box contact detection and position-based resolution.

use crate::body::Body;
use crate::float::Float;
use crate::vec::Vec2;

/// Overlap between two boxes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Contact<F: Float> {
    /// Unit axis pointing from the first body towards the second.
    pub normal: Vec2<F>,
    /// Penetration depth along `normal`.
    pub depth: F,
}

/// Contact between `a` and `b`, separated along the axis of least penetration.
pub fn box_contact<F: Float>(a: &Body<F>, b: &Body<F>) -> Option<Contact<F>> {
    let delta = b.pos - a.pos;
    let overlap_x = a.half_extents.x + b.half_extents.x - delta.x.abs();
    let overlap_y = a.half_extents.y + b.half_extents.y - delta.y.abs();
    if overlap_x <= F::zero() || overlap_y <= F::zero() {
        return None;
    }

    let direction = |d: F| if d < F::zero() { -F::one() } else { F::one() };
    if overlap_x < overlap_y {
        Some(Contact { normal: Vec2::new(direction(delta.x), F::zero()), depth: overlap_x })
    } else {
        Some(Contact { normal: Vec2::new(F::zero(), direction(delta.y)), depth: overlap_y })
    }
}

/// Push `a` and `b` apart along `contact` in proportion to their inverse
/// masses, then bounce and damp their approach.
///
/// Restitution is the larger elasticity of the pair; friction is the
/// geometric mean of both frictions, bounded by the normal impulse.
pub fn resolve<F: Float>(a: &mut Body<F>, b: &mut Body<F>, contact: &Contact<F>) {
    let w_total = a.inv_mass + b.inv_mass;
    if w_total.is_near_zero(F::from_f32(1e-10)) {
        return; // both static
    }

    // Positional correction must not add velocity of its own.
    let va = a.displacement();
    let vb = b.displacement();

    let correction = contact.normal.scale(contact.depth);
    a.pos = a.pos - correction.scale(a.inv_mass / w_total);
    b.pos = b.pos + correction.scale(b.inv_mass / w_total);

    let relative = vb - va;
    let normal_speed = relative.dot(contact.normal);
    if normal_speed >= F::zero() {
        a.set_displacement(va);
        b.set_displacement(vb);
        return;
    }

    let restitution = a.fixture.elasticity.max(b.fixture.elasticity);
    let friction = (a.fixture.friction * b.fixture.friction).sqrt();

    let normal_impulse = -(F::one() + restitution) * normal_speed / w_total;
    let impulse = contact.normal.scale(normal_impulse);

    // Coulomb friction: never more than `friction` times the normal impulse.
    let tangent = relative - contact.normal.scale(normal_speed);
    let tangent_speed = tangent.length();
    let drag = if tangent_speed.is_near_zero(F::from_f32(1e-12)) {
        Vec2::zero()
    } else {
        let tangent_impulse = (tangent_speed / w_total).min(friction * normal_impulse);
        tangent.scale(tangent_impulse / tangent_speed)
    };

    a.set_displacement(va - impulse.scale(a.inv_mass) + drag.scale(a.inv_mass));
    b.set_displacement(vb + impulse.scale(b.inv_mass) - drag.scale(b.inv_mass));
}
