//! Fixture-unit table from the 2021 Uniform Plumbing Code, Appendix A.
//!
//! Source: 2021 UPC Illustrated Training Manual, Figure A 108.1B, as
//! transcribed for flush-tank and flushometer-valve systems. Flushometer
//! valves are not rated below 22 GPM.
//!
//! The GPM 280 row (2583 / 2583) is reproduced as published even though it
//! breaks monotonicity; [`FixtureUnitTable::anomalies`](super::FixtureUnitTable::anomalies)
//! reports it.

use super::Breakpoint;

pub(super) const UPC_2021: [Breakpoint; 125] = [
    Breakpoint::tank_only(1.0, 0),
    Breakpoint::tank_only(2.0, 1),
    Breakpoint::tank_only(3.0, 3),
    Breakpoint::tank_only(4.0, 4),
    Breakpoint::tank_only(5.0, 6),
    Breakpoint::tank_only(6.0, 7),
    Breakpoint::tank_only(7.0, 8),
    Breakpoint::tank_only(8.0, 10),
    Breakpoint::tank_only(9.0, 12),
    Breakpoint::tank_only(10.0, 13),
    Breakpoint::tank_only(11.0, 15),
    Breakpoint::tank_only(12.0, 16),
    Breakpoint::tank_only(13.0, 18),
    Breakpoint::tank_only(14.0, 20),
    Breakpoint::tank_only(15.0, 21),
    Breakpoint::tank_only(16.0, 23),
    Breakpoint::tank_only(17.0, 24),
    Breakpoint::tank_only(18.0, 26),
    Breakpoint::tank_only(19.0, 28),
    Breakpoint::tank_only(20.0, 30),
    Breakpoint::tank_only(21.0, 32),
    Breakpoint::new(22.0, 34, 5),
    Breakpoint::new(23.0, 36, 6),
    Breakpoint::new(24.0, 39, 7),
    Breakpoint::new(25.0, 42, 8),
    Breakpoint::new(26.0, 44, 9),
    Breakpoint::new(27.0, 46, 10),
    Breakpoint::new(28.0, 49, 11),
    Breakpoint::new(29.0, 51, 12),
    Breakpoint::new(30.0, 54, 13),
    Breakpoint::new(31.0, 56, 14),
    Breakpoint::new(32.0, 58, 15),
    Breakpoint::new(33.0, 60, 16),
    Breakpoint::new(34.0, 63, 18),
    Breakpoint::new(35.0, 66, 20),
    Breakpoint::new(36.0, 69, 21),
    Breakpoint::new(37.0, 74, 23),
    Breakpoint::new(38.0, 78, 25),
    Breakpoint::new(39.0, 83, 26),
    Breakpoint::new(40.0, 86, 28),
    Breakpoint::new(41.0, 90, 30),
    Breakpoint::new(42.0, 95, 31),
    Breakpoint::new(43.0, 99, 33),
    Breakpoint::new(44.0, 103, 35),
    Breakpoint::new(45.0, 107, 37),
    Breakpoint::new(46.0, 111, 39),
    Breakpoint::new(47.0, 115, 42),
    Breakpoint::new(48.0, 119, 44),
    Breakpoint::new(49.0, 123, 46),
    Breakpoint::new(50.0, 127, 48),
    Breakpoint::new(51.0, 130, 50),
    Breakpoint::new(52.0, 135, 52),
    Breakpoint::new(53.0, 141, 54),
    Breakpoint::new(54.0, 146, 57),
    Breakpoint::new(55.0, 151, 60),
    Breakpoint::new(56.0, 155, 63),
    Breakpoint::new(57.0, 160, 66),
    Breakpoint::new(58.0, 165, 69),
    Breakpoint::new(59.0, 170, 73),
    Breakpoint::new(60.0, 175, 76),
    Breakpoint::new(62.0, 185, 82),
    Breakpoint::new(64.0, 195, 88),
    Breakpoint::new(66.0, 205, 95),
    Breakpoint::new(68.0, 215, 102),
    Breakpoint::new(70.0, 225, 108),
    Breakpoint::new(72.0, 236, 116),
    Breakpoint::new(74.0, 245, 124),
    Breakpoint::new(76.0, 254, 132),
    Breakpoint::new(78.0, 264, 140),
    Breakpoint::new(80.0, 275, 148),
    Breakpoint::new(82.0, 284, 158),
    Breakpoint::new(84.0, 294, 168),
    Breakpoint::new(86.0, 305, 176),
    Breakpoint::new(88.0, 315, 186),
    Breakpoint::new(90.0, 326, 195),
    Breakpoint::new(92.0, 337, 205),
    Breakpoint::new(94.0, 348, 214),
    Breakpoint::new(96.0, 359, 223),
    Breakpoint::new(98.0, 370, 234),
    Breakpoint::new(100.0, 380, 245),
    Breakpoint::new(105.0, 405, 270),
    Breakpoint::new(110.0, 431, 295),
    Breakpoint::new(115.0, 455, 329),
    Breakpoint::new(120.0, 479, 365),
    Breakpoint::new(125.0, 506, 396),
    Breakpoint::new(130.0, 533, 430),
    Breakpoint::new(135.0, 559, 460),
    Breakpoint::new(140.0, 585, 490),
    Breakpoint::new(145.0, 611, 521),
    Breakpoint::new(150.0, 638, 559),
    Breakpoint::new(155.0, 665, 596),
    Breakpoint::new(160.0, 692, 631),
    Breakpoint::new(165.0, 719, 666),
    Breakpoint::new(170.0, 748, 700),
    Breakpoint::new(175.0, 778, 739),
    Breakpoint::new(180.0, 809, 775),
    Breakpoint::new(185.0, 840, 811),
    Breakpoint::new(190.0, 874, 850),
    Breakpoint::new(200.0, 945, 931),
    Breakpoint::new(210.0, 1018, 1009),
    Breakpoint::new(220.0, 1091, 1091),
    Breakpoint::new(230.0, 1173, 1173),
    Breakpoint::new(240.0, 1254, 1254),
    Breakpoint::new(250.0, 1335, 1335),
    Breakpoint::new(260.0, 1418, 1418),
    Breakpoint::new(270.0, 1500, 1500),
    Breakpoint::new(280.0, 2583, 2583),
    Breakpoint::new(290.0, 1668, 1668),
    Breakpoint::new(300.0, 1755, 1755),
    Breakpoint::new(310.0, 1845, 1845),
    Breakpoint::new(320.0, 1926, 1926),
    Breakpoint::new(330.0, 2018, 2018),
    Breakpoint::new(340.0, 2110, 2110),
    Breakpoint::new(350.0, 2204, 2204),
    Breakpoint::new(360.0, 2298, 2298),
    Breakpoint::new(370.0, 2388, 2388),
    Breakpoint::new(380.0, 2480, 2480),
    Breakpoint::new(390.0, 2575, 2575),
    Breakpoint::new(400.0, 2670, 2670),
    Breakpoint::new(410.0, 2765, 2765),
    Breakpoint::new(420.0, 2862, 2862),
    Breakpoint::new(430.0, 2960, 2960),
    Breakpoint::new(440.0, 3060, 3060),
    Breakpoint::new(450.0, 3150, 3150),
    Breakpoint::new(500.0, 3620, 3620),
];
