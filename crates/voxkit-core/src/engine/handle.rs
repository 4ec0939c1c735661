use super::algorithm::{ConstAlgorithm, InPlaceAlgorithm, OutOfPlaceAlgorithm};
use super::dispatch;
use super::observer::{DataObserver, ObserverId, ObserverRef, ObserverRegistry};
use super::view::ImageView;
use crate::alg::Paste;
use crate::core::lattice::{Extent, ExtentIterator, Point, Size};
use crate::image::{
    Complex, Domain, ImageError, ImageState, PixelSampling, Value, ValueType, Variant,
};
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::{Rc, Weak};
use tracing::{debug, trace, warn};

pub(crate) struct ImageData {
    state: ImageState,
    observers: ObserverRegistry,
}

impl Drop for ImageData {
    fn drop(&mut self) {
        let observers = self.observers.drain();
        debug!(
            observers = observers.len(),
            variant = %self.state.variant(),
            "Destroying image data."
        );
        for observer in observers {
            match observer.try_borrow_mut() {
                Ok(mut observer) => observer.on_destroy(),
                // Drop cannot report failure; the observer is mid-callback.
                Err(_) => warn!("Observer busy during image destruction; destroy notice skipped."),
            }
        }
    }
}

/// Shared owner of one [`ImageState`] and its observers.
///
/// Clones share the same data. The state is freed, and every observer receives
/// [`DataObserver::on_destroy`], when the last handle is dropped.
#[derive(Clone)]
pub struct ImageHandle {
    inner: Rc<RefCell<ImageData>>,
}

impl fmt::Debug for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.try_borrow() {
            Ok(data) => f
                .debug_struct("ImageHandle")
                .field("variant", &data.state.variant())
                .field("extent", &data.state.extent())
                .field("observers", &data.observers.len())
                .finish(),
            Err(_) => f.write_str("ImageHandle(<borrowed>)"),
        }
    }
}

impl ImageHandle {
    pub fn create(
        extent: Extent,
        value_type: ValueType,
        domain: Domain,
    ) -> Result<Self, ImageError> {
        Self::create_with_sampling(extent, value_type, domain, PixelSampling::default())
    }

    pub fn create_with_sampling(
        extent: Extent,
        value_type: ValueType,
        domain: Domain,
        sampling: PixelSampling,
    ) -> Result<Self, ImageError> {
        let state = ImageState::new(extent, value_type, domain, sampling)?;
        debug!(variant = %state.variant(), %extent, samples = state.len(), "Created image state.");
        Ok(Self::from_state(state))
    }

    pub fn from_state(state: ImageState) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ImageData {
                state,
                observers: ObserverRegistry::default(),
            })),
        }
    }

    fn data(&self) -> Result<Ref<'_, ImageData>, ImageError> {
        self.inner.try_borrow().map_err(|_| ImageError::Busy)
    }

    fn data_mut(&self) -> Result<RefMut<'_, ImageData>, ImageError> {
        self.inner.try_borrow_mut().map_err(|_| ImageError::Busy)
    }

    /// Whether both handles share the same data.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    pub fn downgrade(&self) -> WeakImageHandle {
        WeakImageHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// Runs `f` with shared access to the state.
    pub fn with_state<R>(&self, f: impl FnOnce(&ImageState) -> R) -> Result<R, ImageError> {
        Ok(f(&self.data()?.state))
    }

    pub fn variant(&self) -> Result<Variant, ImageError> {
        self.with_state(ImageState::variant)
    }

    pub fn value_type(&self) -> Result<ValueType, ImageError> {
        self.with_state(ImageState::value_type)
    }

    pub fn domain(&self) -> Result<Domain, ImageError> {
        self.with_state(ImageState::domain)
    }

    pub fn extent(&self) -> Result<Extent, ImageError> {
        self.with_state(ImageState::extent)
    }

    pub fn size(&self) -> Result<Size, ImageError> {
        self.with_state(ImageState::size)
    }

    pub fn sampling(&self) -> Result<PixelSampling, ImageError> {
        self.with_state(ImageState::sampling)
    }

    /// Every addressable point in scan order.
    pub fn points(&self) -> Result<ExtentIterator, ImageError> {
        self.with_state(ImageState::points)
    }

    pub fn get_value(&self, p: Point) -> Result<Value, ImageError> {
        self.data()?.state.get_value(p)
    }

    /// Writes one sample without notifying observers; see
    /// [`notify_update`](Self::notify_update).
    pub fn set_value(&self, p: Point, value: Value) -> Result<(), ImageError> {
        self.data_mut()?.state.set_value(p, value)
    }

    pub fn get_real(&self, p: Point) -> Result<f64, ImageError> {
        self.with_state(|state| ImageView::new(state).get_real(p))?
    }

    pub fn set_real(&self, p: Point, v: f64) -> Result<(), ImageError> {
        self.set_value(p, Value::Real(v))
    }

    pub fn get_complex(&self, p: Point) -> Result<Complex<f64>, ImageError> {
        self.with_state(|state| ImageView::new(state).get_complex(p))?
    }

    pub fn set_complex(&self, p: Point, c: Complex<f64>) -> Result<(), ImageError> {
        self.set_value(p, Value::Complex(c))
    }

    /// Notifies every live observer in registration order, stopping at the
    /// first failure.
    ///
    /// Observers see the state through an [`ImageView`]; the data stays
    /// borrowed until the round ends, so any attempt to mutate it meanwhile
    /// fails with [`ImageError::Busy`].
    pub fn notify_update(&self) -> Result<(), ImageError> {
        let observers = self.data_mut()?.observers.live();
        trace!(observers = observers.len(), "Notifying observers of update.");
        let data = self.data()?;
        let view = ImageView::new(&data.state);
        for observer in &observers {
            observer
                .try_borrow_mut()
                .map_err(|_| ImageError::ObserverBusy)?
                .on_update(&view)?;
        }
        Ok(())
    }

    /// Applies `algorithm` to the owned state, then notifies observers.
    pub fn apply_in_place<A: InPlaceAlgorithm>(&self, algorithm: &mut A) -> Result<(), ImageError> {
        dispatch::apply_in_place(&mut self.data_mut()?.state, algorithm)?;
        self.notify_update()
    }

    /// Builds a new image from this one; the result has no observers.
    pub fn apply<A: OutOfPlaceAlgorithm>(&self, algorithm: &mut A) -> Result<Self, ImageError> {
        let state = dispatch::apply(&self.data()?.state, algorithm)?;
        Ok(Self::from_state(state))
    }

    pub fn apply_const<A: ConstAlgorithm>(&self, algorithm: &mut A) -> Result<(), ImageError> {
        dispatch::apply_const(&self.data()?.state, algorithm)
    }

    /// Applies an in-place algorithm to a deep copy, leaving this image untouched.
    pub fn apply_to_copy<A: InPlaceAlgorithm>(&self, algorithm: &mut A) -> Result<Self, ImageError> {
        let copy = self.copy()?;
        copy.apply_in_place(algorithm)?;
        Ok(copy)
    }

    /// Deep copy of the state without observers.
    pub fn copy(&self) -> Result<Self, ImageError> {
        Ok(Self::from_state(self.data()?.state.clone()))
    }

    /// New image holding the samples of `region`.
    pub fn extract(&self, region: Extent) -> Result<Self, ImageError> {
        let state = self.data()?.state.extract(region)?;
        Ok(Self::from_state(state))
    }

    /// Copies the samples of `source` where both extents overlap, then
    /// notifies observers. Pasting an image onto itself does nothing.
    pub fn paste(&self, source: &Self) -> Result<(), ImageError> {
        if self.ptr_eq(source) {
            return Ok(());
        }
        {
            let source = source.data()?;
            let mut paste = Paste::new(&source.state);
            dispatch::apply_in_place(&mut self.data_mut()?.state, &mut paste)?;
        }
        self.notify_update()
    }

    /// Reallocates to `extent`, keeping the overlapping samples, then
    /// notifies observers.
    pub fn resize(&self, extent: Extent) -> Result<(), ImageError> {
        {
            let mut data = self.data_mut()?;
            debug!(from = %data.state.extent(), to = %extent, "Resizing image state.");
            data.state.resize(extent)?;
        }
        self.notify_update()
    }

    pub fn add_observer<O: DataObserver + 'static>(
        &self,
        observer: &Rc<RefCell<O>>,
    ) -> Result<ObserverId, ImageError> {
        let observer: ObserverRef = observer.clone();
        Ok(self.data_mut()?.observers.add(&observer))
    }

    pub fn remove_observer(&self, id: ObserverId) -> Result<bool, ImageError> {
        Ok(self.data_mut()?.observers.remove(id))
    }

    pub fn remove_observer_ref<O: DataObserver + 'static>(
        &self,
        observer: &Rc<RefCell<O>>,
    ) -> Result<bool, ImageError> {
        let observer: ObserverRef = observer.clone();
        Ok(self.data_mut()?.observers.remove_ref(&observer))
    }

    pub fn observer_count(&self) -> Result<usize, ImageError> {
        Ok(self.data()?.observers.len())
    }
}

/// Non-owning reference to image data, checked before every use.
#[derive(Clone, Default)]
pub struct WeakImageHandle {
    inner: Weak<RefCell<ImageData>>,
}

impl fmt::Debug for WeakImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeakImageHandle")
            .field("valid", &self.is_valid())
            .finish()
    }
}

impl WeakImageHandle {
    pub fn upgrade(&self) -> Option<ImageHandle> {
        self.inner.upgrade().map(|inner| ImageHandle { inner })
    }

    pub fn is_valid(&self) -> bool {
        self.inner.strong_count() > 0
    }

    /// Registers an observer on the data if it still exists.
    pub fn add_observer<O: DataObserver + 'static>(
        &self,
        observer: &Rc<RefCell<O>>,
    ) -> Result<ObserverId, ImageError> {
        self.upgrade()
            .ok_or(ImageError::DataDestroyed)?
            .add_observer(observer)
    }
}
