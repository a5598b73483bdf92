// src/pixel.rs

//! RGBA pixel values with clamped channels.

use serde::{Deserialize, Serialize};

/// Selects one of the four pixel channels by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    Red,
    Green,
    Blue,
    Alpha,
}

/// A four-channel color value. Each channel holds an integer in `[0, 255]`;
/// wider inputs are clamped before storage, never stored out of range.
///
/// `#[repr(C)]` fixes the field order so a plane of pixels reads as
/// R,G,B,A byte quadruplets.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Fully transparent black, the initial value of every surface cell.
    pub const TRANSPARENT: Pixel = Pixel {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };

    /// Builds a pixel from wide channel values, clamping each into `[0, 255]`.
    pub fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
            a: clamp_channel(a),
        }
    }

    /// Reads one channel by name.
    pub fn channel(&self, channel: Channel) -> u8 {
        match channel {
            Channel::Red => self.r,
            Channel::Green => self.g,
            Channel::Blue => self.b,
            Channel::Alpha => self.a,
        }
    }

    /// Writes one channel by name, clamping the value into `[0, 255]`.
    pub fn set_channel(&mut self, channel: Channel, value: i32) {
        let v = clamp_channel(value);
        match channel {
            Channel::Red => self.r = v,
            Channel::Green => self.g = v,
            Channel::Blue => self.b = v,
            Channel::Alpha => self.a = v,
        }
    }

    /// The pixel as its four bytes in R,G,B,A order.
    pub const fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Clamp a wide channel value into the storable `[0, 255]` range.
fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps_channels() {
        let px = Pixel::new(-5, 300, 128, 256);
        assert_eq!(px, Pixel::new(0, 255, 128, 255));
        assert_eq!(px.to_bytes(), [0, 255, 128, 255]);
    }

    #[test]
    fn test_channel_accessors() {
        let mut px = Pixel::new(1, 2, 3, 4);
        assert_eq!(px.channel(Channel::Red), 1);
        assert_eq!(px.channel(Channel::Green), 2);
        assert_eq!(px.channel(Channel::Blue), 3);
        assert_eq!(px.channel(Channel::Alpha), 4);

        px.set_channel(Channel::Green, 999);
        assert_eq!(px.channel(Channel::Green), 255);
        px.set_channel(Channel::Alpha, -1);
        assert_eq!(px.channel(Channel::Alpha), 0);
    }

    #[test]
    fn test_equality_covers_all_channels() {
        let a = Pixel::new(10, 20, 30, 40);
        let b = Pixel::new(10, 20, 30, 41);
        assert_ne!(a, b);
        assert_eq!(a, Pixel::new(10, 20, 30, 40));
    }

    #[test]
    fn test_transparent_is_all_zero() {
        assert_eq!(Pixel::TRANSPARENT.to_bytes(), [0, 0, 0, 0]);
        assert_eq!(Pixel::default(), Pixel::TRANSPARENT);
    }
}
