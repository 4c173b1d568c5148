//! 절연 저항 온도 보정 계수(TCF) 경험표.
//!
//! 값은 현장 양식에 인쇄된 표를 그대로 옮긴 것이다. 해석식으로 다시 만들지 않는다.

use super::{TcfPoint, TcfTable};

const fn pt(celsius: i32, factor: f64) -> TcfPoint {
    TcfPoint { celsius, factor }
}

/// 표준 절연 저항 TCF 표(1°C 간격, -24~110°C, 20°C = 1.0).
pub const STANDARD_POINTS: [TcfPoint; 135] = [
    pt(-24, 0.054), pt(-23, 0.068), pt(-22, 0.082), pt(-21, 0.096), pt(-20, 0.11), pt(-19, 0.124),
    pt(-18, 0.138), pt(-17, 0.152), pt(-16, 0.166), pt(-15, 0.18), pt(-14, 0.194), pt(-13, 0.208),
    pt(-12, 0.222), pt(-11, 0.236), pt(-10, 0.25), pt(-9, 0.264), pt(-8, 0.278), pt(-7, 0.292),
    pt(-6, 0.306), pt(-5, 0.32), pt(-4, 0.336), pt(-3, 0.352), pt(-2, 0.368), pt(-1, 0.384),
    pt(0, 0.4), pt(1, 0.42), pt(2, 0.44), pt(3, 0.46), pt(4, 0.48), pt(5, 0.5),
    pt(6, 0.526), pt(7, 0.552), pt(8, 0.578), pt(9, 0.604), pt(10, 0.63), pt(11, 0.666),
    pt(12, 0.702), pt(13, 0.738), pt(14, 0.774), pt(15, 0.81), pt(16, 0.848), pt(17, 0.886),
    pt(18, 0.924), pt(19, 0.962), pt(20, 1.0), pt(21, 1.05), pt(22, 1.1), pt(23, 1.15),
    pt(24, 1.2), pt(25, 1.25), pt(26, 1.316), pt(27, 1.382), pt(28, 1.448), pt(29, 1.514),
    pt(30, 1.58), pt(31, 1.664), pt(32, 1.748), pt(33, 1.832), pt(34, 1.872), pt(35, 2.0),
    pt(36, 2.1), pt(37, 2.2), pt(38, 2.3), pt(39, 2.4), pt(40, 2.5), pt(41, 2.628),
    pt(42, 2.756), pt(43, 2.884), pt(44, 3.012), pt(45, 3.15), pt(46, 3.316), pt(47, 3.482),
    pt(48, 3.648), pt(49, 3.814), pt(50, 3.98), pt(51, 4.184), pt(52, 4.388), pt(53, 4.592),
    pt(54, 4.796), pt(55, 5.0), pt(56, 5.26), pt(57, 5.52), pt(58, 5.78), pt(59, 6.04),
    pt(60, 6.3), pt(61, 6.62), pt(62, 6.94), pt(63, 7.26), pt(64, 7.58), pt(65, 7.9),
    pt(66, 8.32), pt(67, 8.74), pt(68, 9.16), pt(69, 9.58), pt(70, 10.0), pt(71, 10.52),
    pt(72, 11.04), pt(73, 11.56), pt(74, 12.08), pt(75, 12.6), pt(76, 13.24), pt(77, 13.88),
    pt(78, 14.52), pt(79, 15.16), pt(80, 15.8), pt(81, 16.64), pt(82, 17.48), pt(83, 18.32),
    pt(84, 19.16), pt(85, 20.0), pt(86, 21.04), pt(87, 22.08), pt(88, 23.12), pt(89, 24.16),
    pt(90, 25.2), pt(91, 26.45), pt(92, 27.7), pt(93, 28.95), pt(94, 30.2), pt(95, 31.6),
    pt(96, 33.28), pt(97, 34.96), pt(98, 36.64), pt(99, 38.32), pt(100, 40.0), pt(101, 42.08),
    pt(102, 44.16), pt(103, 46.24), pt(104, 48.32), pt(105, 50.4), pt(106, 52.96), pt(107, 55.52),
    pt(108, 58.08), pt(109, 60.64), pt(110, 63.2),
];

/// 건식 변압기 권선 TCF 표(1°C 간격, -24~65°C).
pub const DRY_TYPE_POINTS: [TcfPoint; 90] = [
    pt(-24, 0.048), pt(-23, 0.051), pt(-22, 0.055), pt(-21, 0.059), pt(-20, 0.063), pt(-19, 0.068),
    pt(-18, 0.072), pt(-17, 0.077), pt(-16, 0.082), pt(-15, 0.088), pt(-14, 0.093), pt(-13, 0.1),
    pt(-12, 0.106), pt(-11, 0.113), pt(-10, 0.12), pt(-9, 0.128), pt(-8, 0.136), pt(-7, 0.145),
    pt(-6, 0.154), pt(-5, 0.164), pt(-4, 0.174), pt(-3, 0.185), pt(-2, 0.197), pt(-1, 0.209),
    pt(0, 0.222), pt(1, 0.236), pt(2, 0.251), pt(3, 0.266), pt(4, 0.282), pt(5, 0.3),
    pt(6, 0.318), pt(7, 0.338), pt(8, 0.358), pt(9, 0.38), pt(10, 0.404), pt(11, 0.429),
    pt(12, 0.455), pt(13, 0.483), pt(14, 0.513), pt(15, 0.544), pt(16, 0.577), pt(17, 0.612),
    pt(18, 0.65), pt(19, 0.689), pt(20, 0.731), pt(21, 0.775), pt(22, 0.822), pt(23, 0.872),
    pt(24, 0.925), pt(25, 0.981), pt(26, 1.04), pt(27, 1.103), pt(28, 1.17), pt(29, 1.241),
    pt(30, 1.316), pt(31, 1.396), pt(32, 1.48), pt(33, 1.57), pt(34, 1.665), pt(35, 1.766),
    pt(36, 1.873), pt(37, 1.987), pt(38, 2.108), pt(39, 2.236), pt(40, 2.371), pt(41, 2.514),
    pt(42, 2.665), pt(43, 2.825), pt(44, 2.994), pt(45, 3.174), pt(46, 3.363), pt(47, 3.564),
    pt(48, 3.776), pt(49, 4.0), pt(50, 4.236), pt(51, 4.486), pt(52, 4.75), pt(53, 5.03),
    pt(54, 5.326), pt(55, 5.639), pt(56, 5.97), pt(57, 6.32), pt(58, 6.69), pt(59, 7.082),
    pt(60, 7.498), pt(61, 7.938), pt(62, 8.403), pt(63, 8.895), pt(64, 9.415), pt(65, 9.96),
];

/// 중압 개폐기 MTS 양식의 부분 표. 10°C와 15~30°C만 정의되어 있다.
pub const SWITCH_MTS_SPARSE_POINTS: [TcfPoint; 17] = [
    pt(10, 0.63), pt(15, 0.81), pt(16, 0.848), pt(17, 0.886), pt(18, 0.924), pt(19, 0.962),
    pt(20, 1.0), pt(21, 1.05), pt(22, 1.1), pt(23, 1.15), pt(24, 1.2), pt(25, 1.25),
    pt(26, 1.316), pt(27, 1.382), pt(28, 1.448), pt(29, 1.514), pt(30, 1.58),
];

/// VLF 케이블 시험의 5°C 구간표(0~70°C). 구간 사이는 선형 보간한다.
pub const CABLE_BANDED_POINTS: [TcfPoint; 15] = [
    pt(0, 0.4), pt(5, 0.5), pt(10, 0.63), pt(15, 0.81), pt(20, 1.0), pt(25, 1.25),
    pt(30, 1.58), pt(35, 2.0), pt(40, 2.5), pt(45, 3.15), pt(50, 3.98), pt(55, 5.0),
    pt(60, 6.3), pt(65, 7.9), pt(70, 10.0),
];

/// 대형 건식 변압기 양식의 화씨 → 섭씨 대응표. -18°C 행은 원래 양식에도 없다.
pub const DRY_TYPE_CONVERSION_ROWS: [(f64, i32); 89] = [
    (-11.2, -24), (-9.4, -23), (-7.6, -22), (-5.8, -21), (-4.0, -20), (-2.2, -19), (1.4, -17),
    (3.2, -16), (5.0, -15), (6.8, -14), (8.6, -13), (10.4, -12), (12.2, -11), (14.0, -10),
    (15.8, -9), (17.6, -8), (19.4, -7), (21.2, -6), (23.0, -5), (24.8, -4), (26.6, -3),
    (28.4, -2), (30.2, -1), (32.0, 0), (33.8, 1), (35.6, 2), (37.4, 3), (39.2, 4),
    (41.0, 5), (42.8, 6), (44.6, 7), (46.4, 8), (48.2, 9), (50.0, 10), (51.8, 11),
    (53.6, 12), (55.4, 13), (57.2, 14), (59.0, 15), (60.8, 16), (62.6, 17), (64.4, 18),
    (66.2, 19), (68.0, 20), (70.0, 21), (72.0, 22), (73.4, 23), (75.2, 24), (77.0, 25),
    (78.8, 26), (80.6, 27), (82.4, 28), (84.2, 29), (86.0, 30), (87.8, 31), (89.6, 32),
    (91.4, 33), (93.2, 34), (95.0, 35), (96.8, 36), (98.6, 37), (100.4, 38), (102.2, 39),
    (104.0, 40), (105.8, 41), (107.6, 42), (109.4, 43), (111.2, 44), (113.0, 45), (114.8, 46),
    (116.6, 47), (118.4, 48), (120.2, 49), (122.0, 50), (123.8, 51), (125.6, 52), (127.4, 53),
    (129.2, 54), (131.0, 55), (132.8, 56), (134.6, 57), (136.4, 58), (138.2, 59), (140.0, 60),
    (141.8, 61), (143.6, 62), (145.4, 63), (147.2, 64), (149.0, 65),
];

/// 표준 표 전체(상한 110°C).
pub const STANDARD: TcfTable = TcfTable::discrete(&STANDARD_POINTS);

/// ATS 25 변압기 양식: 표준 표를 60°C까지만 사용.
pub const STANDARD_TO_60: TcfTable = TcfTable::discrete_until(&STANDARD_POINTS, 60);

pub const DRY_TYPE: TcfTable = TcfTable::discrete(&DRY_TYPE_POINTS);

pub const SWITCH_MTS_SPARSE: TcfTable = TcfTable::discrete(&SWITCH_MTS_SPARSE_POINTS);

pub const CABLE_BANDED: TcfTable = TcfTable::banded(&CABLE_BANDED_POINTS);
