use crate::FieldFn;
use crate::mutator::Mutator;

// One mutator wrapped around the layers beneath it
pub struct Mutated<'a> {
    mutator: Mutator,
    inner: Box<dyn FieldFn + 'a>,
}

impl FieldFn for Mutated<'_> {
    fn width(&self) -> u32 {
        self.inner.width()
    }

    fn height(&self) -> u32 {
        self.inner.height()
    }

    fn get2(&self, x: u32, y: u32) -> f64 {
        self.mutator.apply(&*self.inner, x, y)
    }
}

// Wrap `base` in `mutators`, first listed outermost.
// [a, b, c] evaluates as a(b(c(base))): the list is folded back to front.
// With no mutators the base is returned as is.
pub fn compose<'a, F>(base: F, mutators: &[Mutator]) -> Box<dyn FieldFn + 'a>
where
    F: FieldFn + 'a,
{
    let base: Box<dyn FieldFn + 'a> = Box::new(base);
    mutators.iter().rev().fold(base, |inner, &mutator| {
        Box::new(Mutated { mutator, inner }) as Box<dyn FieldFn + 'a>
    })
}

#[cfg(test)]
mod tests {
    use super::compose;
    use crate::FieldFn;
    use crate::field::Field;
    use crate::mutator::Mutator;

    fn gradient() -> Field {
        Field::from_fn(10, 10, |x, y| (x * 10 + y) as f64 / 100.0)
    }

    #[test]
    fn pipeline_empty_is_identity() {
        let base = gradient();
        let composed = compose(&base, &[]);
        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(composed.get2(x, y), base.get(x, y));
            }
        }
    }

    #[test]
    fn pipeline_first_listed_is_outermost() {
        let base = Field::from_fn(1, 1, |_, _| 0.37);
        // inverse(step(0.37)) = 1 - 0.3
        let step_inside = compose(&base, &[Mutator::Inverse, Mutator::TopographicalStep]);
        assert!((step_inside.get2(0, 0) - 0.7).abs() < 1e-12);
        // step(inverse(0.37)) = floor(6.3) / 10
        let step_outside = compose(&base, &[Mutator::TopographicalStep, Mutator::Inverse]);
        assert!((step_outside.get2(0, 0) - 0.6).abs() < 1e-12);
    }

    #[test]
    fn pipeline_order_is_observable() {
        let base = gradient();
        let a = Field::materialize(&compose(
            &base,
            &[Mutator::TopographicalStep, Mutator::Inverse],
        ));
        let b = Field::materialize(&compose(
            &base,
            &[Mutator::Inverse, Mutator::TopographicalStep],
        ));
        assert_ne!(a, b);
    }

    #[test]
    fn pipeline_keeps_domain() {
        let base = Field::from_fn(6, 3, |_, _| 0.5);
        let composed = compose(&base, &[Mutator::Topographical, Mutator::Inverse]);
        assert_eq!((composed.width(), composed.height()), (6, 3));
    }
}
