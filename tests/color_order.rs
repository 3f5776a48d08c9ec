mod tests {
    use myrtio_pixel_link::color::{ColorOrder, ColorOrderPolicy, Rgb, rgb_from_u32, rgb_to_u32};

    const ORDERS: [ColorOrder; 3] = [ColorOrder::Grb, ColorOrder::Rgb, ColorOrder::Brg];

    #[test]
    fn test_color_order_from_raw() {
        assert_eq!(ColorOrder::from_raw(0), Some(ColorOrder::Grb));
        assert_eq!(ColorOrder::from_raw(1), Some(ColorOrder::Rgb));
        assert_eq!(ColorOrder::from_raw(2), Some(ColorOrder::Brg));
        assert_eq!(ColorOrder::from_raw(3), None);
    }

    #[test]
    fn test_offsets_are_permutations() {
        for order in ORDERS {
            let offsets = order.offsets();
            let mut seen = [false; 3];
            for offset in [offsets.red, offsets.green, offsets.blue] {
                assert!(offset < 3);
                assert!(!seen[offset], "{order:?} reuses offset {offset}");
                seen[offset] = true;
            }
        }
    }

    #[test]
    fn test_encode() {
        assert_eq!(ColorOrder::Grb.encode(0x11, 0x22, 0x33), [0x22, 0x11, 0x33]);
        assert_eq!(ColorOrder::Rgb.encode(0x11, 0x22, 0x33), [0x11, 0x22, 0x33]);
        assert_eq!(ColorOrder::Brg.encode(0x11, 0x22, 0x33), [0x33, 0x11, 0x22]);
    }

    #[test]
    fn test_decode_restores_channels() {
        for order in ORDERS {
            let raw = order.encode(1, 2, 3);
            assert_eq!(order.decode(raw), (1, 2, 3));
        }
    }

    #[test]
    fn test_policy_ignores_unknown_code() {
        let mut policy = ColorOrderPolicy::default();
        assert_eq!(policy.order(), ColorOrder::Grb);

        assert!(policy.set_raw(2));
        assert_eq!(policy.order(), ColorOrder::Brg);

        assert!(!policy.set_raw(3));
        assert_eq!(policy.order(), ColorOrder::Brg);
    }

    #[test]
    fn test_packed_color() {
        assert_eq!(rgb_from_u32(0x112233), Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(rgb_from_u32(0x0F11_2233), Rgb::new(0x11, 0x22, 0x33));
        assert_eq!(rgb_to_u32(Rgb::new(0xAB, 0xCD, 0xEF)), 0x00AB_CDEF);
    }
}
