use std::{
    cell::{Cell, Ref, RefCell},
    rc::Rc,
};

/// A per-frame continuous effect (pulses, particle drift, hover easing).
pub trait FrameEffect {
    /// `time` is seconds since the driver set was created; `dt` the step just taken.
    fn frame(&mut self, time: f64, dt: f64);
}

/// Shared cancellation flag; once disposed, the owning driver never ticks again.
#[derive(Clone, Debug, Default)]
pub struct DisposeToken(Rc<Cell<bool>>);

impl DisposeToken {
    pub fn dispose(&self) {
        self.0.set(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.0.get()
    }
}

/// Host-side view of a spawned effect.
pub struct EffectHandle<E> {
    effect: Rc<RefCell<E>>,
    token: DisposeToken,
}

impl<E> EffectHandle<E> {
    pub fn borrow(&self) -> Ref<'_, E> {
        self.effect.borrow()
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut E) -> R) -> R {
        f(&mut self.effect.borrow_mut())
    }

    pub fn token(&self) -> DisposeToken {
        self.token.clone()
    }

    pub fn dispose(&self) {
        self.token.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.token.is_disposed()
    }
}

struct Driver {
    effect: Rc<RefCell<dyn FrameEffect>>,
    token: DisposeToken,
}

/// One driver per active continuous-effect instance, ticked cooperatively.
#[derive(Default)]
pub struct Drivers {
    time: f64,
    entries: Vec<Driver>,
}

impl Drivers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn<E>(&mut self, effect: E) -> EffectHandle<E>
    where
        E: FrameEffect + 'static,
    {
        let effect = Rc::new(RefCell::new(effect));
        let token = DisposeToken::default();
        let shared: Rc<RefCell<dyn FrameEffect>> = effect.clone();
        self.entries.push(Driver {
            effect: shared,
            token: token.clone(),
        });
        EffectHandle { effect, token }
    }

    pub fn tick(&mut self, dt: f64) {
        self.entries.retain(|d| !d.token.is_disposed());
        if dt > 0.0 {
            self.time += dt;
        }
        for d in &self.entries {
            d.effect.borrow_mut().frame(self.time, dt);
        }
    }

    pub fn dispose_all(&mut self) {
        for d in self.entries.drain(..) {
            d.token.dispose();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.iter().filter(|d| !d.token.is_disposed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn time(&self) -> f64 {
        self.time
    }
}

#[cfg(test)]
#[path = "../../tests/unit/schedule/driver.rs"]
mod tests;
