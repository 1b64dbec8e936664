use core::ops::{Deref, DerefMut};

/// Fixed-capacity row storage. Only the leading `cols` entries of a row are
/// meaningful to the owning matrix; the tail stays zero.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct VecN<const N: usize>(pub(crate) [f64; N]);

impl<const N: usize> VecN<N> {
    #[inline]
    pub const fn zero() -> Self {
        Self([0.; N])
    }

    #[inline]
    pub fn window(&self, len: usize) -> &[f64] {
        &self.0[..len]
    }
}

impl<const N: usize> Deref for VecN<N> {
    type Target = [f64; N];
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for VecN<N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[test]
fn test_window() {
    let mut v = VecN::<4>::zero();
    v[0] = 1.0;
    v[1] = 2.0;
    assert_eq!(v.window(2), &[1.0, 2.0]);
    assert_eq!(v.window(0), &[] as &[f64]);
    assert_eq!(v[3], 0.0);
}
