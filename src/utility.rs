#[macro_export]
#[doc(hidden)]
macro_rules! tuples {
    ($m:ident) => {
        $m!(tuples0, 0);
        $m!(tuples1, 1, p0, T0, 0);
        $m!(tuples2, 2, p0, T0, 0, p1, T1, 1);
        $m!(tuples3, 3, p0, T0, 0, p1, T1, 1, p2, T2, 2);
        $m!(tuples4, 4, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3);
        $m!(tuples5, 5, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4);
        $m!(tuples6, 6, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5);
        $m!(
            tuples7, 7, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6, 6
        );
        $m!(
            tuples8, 8, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6,
            6, p7, T7, 7
        );
        $m!(
            tuples9, 9, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6,
            6, p7, T7, 7, p8, T8, 8
        );
        $m!(
            tuples10, 10, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6,
            6, p7, T7, 7, p8, T8, 8, p9, T9, 9
        );
        $m!(
            tuples11, 11, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6,
            6, p7, T7, 7, p8, T8, 8, p9, T9, 9, p10, T10, 10
        );
        $m!(
            tuples12, 12, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5, p6, T6,
            6, p7, T7, 7, p8, T8, 8, p9, T9, 9, p10, T10, 10, p11, T11, 11
        );
    };
}

/// Tuples that the property runner accepts as a list of generators.
#[macro_export]
#[doc(hidden)]
macro_rules! arities {
    ($m:ident) => {
        $m!(arity1, 1, p0, T0, 0);
        $m!(arity2, 2, p0, T0, 0, p1, T1, 1);
        $m!(arity3, 3, p0, T0, 0, p1, T1, 1, p2, T2, 2);
        $m!(arity4, 4, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3);
        $m!(arity5, 5, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4);
        $m!(arity6, 6, p0, T0, 0, p1, T1, 1, p2, T2, 2, p3, T3, 3, p4, T4, 4, p5, T5, 5);
    };
}

/// Moves a value to its neighbour in the direction of `force`, used to turn
/// excluded float bounds into included ones.
pub trait Nudge {
    fn nudge(self, force: Self) -> Self;
}

macro_rules! nudge {
    ($t:ident) => {
        impl Nudge for $t {
            #[inline]
            fn nudge(self, force: Self) -> Self {
                if self == 0.0 {
                    if force < 0.0 {
                        -$t::MIN_POSITIVE
                    } else {
                        $t::MIN_POSITIVE
                    }
                } else {
                    self + self.abs() * $t::EPSILON * force.signum()
                }
            }
        }
    };
}

nudge!(f32);
nudge!(f64);
