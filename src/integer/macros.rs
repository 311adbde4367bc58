/// Shorthand for creating a big integer in tests.
#[macro_export]
macro_rules! IB {
    ($value:expr) => {
        $crate::IntegerBig::from($value)
    };
}

/// Shorthand for creating a big natural number in tests.
#[macro_export]
macro_rules! NB {
    ($value:expr) => {
        $crate::NaturalBig::from($value)
    };
}

/// Implement the four owned and borrowed combinations of a binary operator.
///
/// The operation itself is written once, on two borrowed operands.
macro_rules! forward_binary_operator {
    ($type:ident, $operator:ident, $method:ident, $implementation:ident) => {
        impl std::ops::$operator<&$type> for &$type {
            type Output = $type;

            fn $method(self, rhs: &$type) -> Self::Output {
                $type::$implementation(self, rhs)
            }
        }

        impl std::ops::$operator<$type> for &$type {
            type Output = $type;

            fn $method(self, rhs: $type) -> Self::Output {
                $type::$implementation(self, &rhs)
            }
        }

        impl std::ops::$operator<&$type> for $type {
            type Output = $type;

            fn $method(self, rhs: &$type) -> Self::Output {
                $type::$implementation(&self, rhs)
            }
        }

        impl std::ops::$operator<$type> for $type {
            type Output = $type;

            fn $method(self, rhs: $type) -> Self::Output {
                $type::$implementation(&self, &rhs)
            }
        }
    }
}

/// Implement `Sum` and `Product` for owned and borrowed items.
macro_rules! fold_iterator {
    ($type:ident) => {
        impl std::iter::Sum for $type {
            fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(num_traits::Zero::zero(), |total, value| total + value)
            }
        }

        impl<'a> std::iter::Sum<&'a $type> for $type {
            fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(num_traits::Zero::zero(), |total, value| total + value)
            }
        }

        impl std::iter::Product for $type {
            fn product<I: Iterator<Item = Self>>(iter: I) -> Self {
                iter.fold(num_traits::One::one(), |total, value| total * value)
            }
        }

        impl<'a> std::iter::Product<&'a $type> for $type {
            fn product<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
                iter.fold(num_traits::One::one(), |total, value| total * value)
            }
        }
    }
}
