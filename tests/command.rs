mod tests {
    use myrtio_pixel_link::command::{
        Command, config_entries, decode_color, decode_groups, decode_index, encode_groups,
    };
    use myrtio_pixel_link::StripEntry;

    #[test]
    fn test_command_from_raw_uses_low_nibble() {
        assert_eq!(Command::from_raw(0x01), Some(Command::Config));
        assert_eq!(Command::from_raw(0x02), Some(Command::Show));
        assert_eq!(Command::from_raw(0x03), Some(Command::SetPixel));
        assert_eq!(Command::from_raw(0x04), Some(Command::SetStrip));
        assert_eq!(Command::from_raw(0x72), Some(Command::Show));
        assert_eq!(Command::from_raw(0x00), None);
        assert_eq!(Command::from_raw(0x0F), None);
    }

    #[test]
    fn test_decode_groups_least_significant_first() {
        assert_eq!(decode_groups(&[0x7F, 0x7F]), 0x3FFF);
        assert_eq!(decode_groups(&[0x00, 0x01]), 0x80);
        assert_eq!(decode_groups(&[0x00, 0x00, 0x00, 0x08]), 0x0100_0000);
        // High bit of every byte is not part of the value
        assert_eq!(decode_groups(&[0xFF]), 0x7F);
    }

    #[test]
    fn test_encode_groups() {
        assert_eq!(encode_groups::<2>(300), [0x2C, 0x02]);
        assert_eq!(decode_groups(&encode_groups::<4>(0x00FF_FFFF)), 0x00FF_FFFF);
    }

    #[test]
    fn test_decode_fields_need_full_width() {
        assert_eq!(decode_index(&[0x05, 0x01]), Some(133));
        assert_eq!(decode_index(&[0x05]), None);
        assert_eq!(decode_color(&[0x7F, 0x7F, 0x7F]), None);
        assert_eq!(decode_color(&[0x7F, 0x7F, 0x7F, 0x07]), Some(0x00FF_FFFF));
    }

    #[test]
    fn test_parse_config_entry() {
        let entry = StripEntry::parse([0b0100_0110, 0x05, 0x01]);
        assert_eq!(
            entry,
            StripEntry {
                pin: 6,
                order_code: 2,
                length: 133
            }
        );
    }

    #[test]
    fn test_config_entries_ignore_trailing_bytes() {
        let args = [0x03, 0x0A, 0x00, 0x24, 0x10, 0x00, 0x7F];
        let entries: Vec<_> = config_entries(&args).collect();
        assert_eq!(
            entries,
            [
                StripEntry {
                    pin: 3,
                    order_code: 0,
                    length: 10
                },
                StripEntry {
                    pin: 4,
                    order_code: 1,
                    length: 16
                },
            ]
        );
    }
}
