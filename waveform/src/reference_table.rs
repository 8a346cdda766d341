//! Precomputed cellular reference waveform table.
//!
//! One LTE-like frame fragment: eight OFDM symbols (512-point IFFT, 36-sample
//! cyclic prefix, 300 QPSK-modulated subcarriers) quantized to 16-bit signed
//! integers at 92.5 percent of full scale. The runtime normalizes each entry by
//! 1/32768 so the table lands inside [-1, 1] without further scaling.

/// Number of complex entries in the reference table.
pub const TABLE_LEN: usize = 4384;

pub(crate) static REFERENCE_I: [i16; TABLE_LEN] = [
    -3355, -13043, 1407, 14595, 2452, -10507, -5541, 530, -5, 604, -3210, -11196,
    -4572, 13662, 16713, 3546, -2831, 3087, 11475, 15940, 10205, -2396, -3950, 4652,
    656, -11861, -5996, 11919, 13802, 3198, -385, 907, 2567, 10821, 17078, 7039,
    -7924, -10378, -5463, -1979, 1156, 63, -6926, -7413, 1810, 6117, 1945, -359,
    -89, -80, 3684, 5923, -1816, -7684, -1781, -698, -11429, -13238, -4108, -6077,
    -12914, -2071, 11021, 2474, -7619, 1784, 7646, -5274, -10978, 1444, 6498, -2938,
    -5538, 934, -565, -8489, -8297, -61, 6326, 7294, 6240, 8278, 12008, 8024,
    -2741, -4380, 5384, 9951, 7571, 11189, 14323, 3506, -7516, -2598, 4018, -804,
    -3999, -7, -2258, -9420, -8440, -5187, -9455, -11343, -4040, 1740, 1749, 2154,
    1564, -1274, 849, 6255, 5824, 3079, 3060, -2018, -10570, -7440, 3087, 1458,
    -9006, -10264, -2366, 5608, 11662, 9665, -4202, -13595, -5957, 2981, -328, -2966,
    4179, 7622, -891, -9015, -5797, 1103, -2628, -14301, -14023, 2103, 9843, -678,
    -4804, 7456, 9678, -7846, -18291, -8322, 6115, 14530, 16363, 7942, -3074, -942,
    7959, 5848, -3292, -7146, -7225, -3153, 9362, 17758, 9685, -506, 2228, 7878,
    6151, 2333, -564, -2322, 2868, 10563, 6848, -2458, 1128, 12127, 9866, -4720,
    -14137, -12635, -6586, -839, 2417, 1341, -3442, -7763, -7021, -2190, 1188, 2890,
    6389, 7670, 2878, -737, -812, -6865, -16032, -14494, -7298, -5837, -554, 10969,
    7040, -9955, -7980, 10078, 10461, -3171, -3840, 1479, -1952, -718, 8458, 6983,
    -1098, 1101, 4573, 2107, 8724, 18735, 9606, -4715, -12, 4379, -10549, -18952,
    -5647, 3051, -4084, -7737, -3658, -1979, -361, 1332, -5060, -12428, -8872, -1921,
    271, 3337, 6821, 6784, 10723, 16249, 6760, -9838, -8838, 1116, -4371, -14732,
    -10247, -3187, -5189, -1828, 9586, 10473, 531, -3526, -2150, -5103, -8516, -6758,
    -3154, 1619, 7472, 5587, -6634, -14139, -5482, 9302, 14009, 6854, -1735, -3718,
    183, 5948, 11662, 15400, 13614, 4883, -7646, -16328, -12835, -709, 3111, -5276,
    -6430, 5819, 9169, -1823, -880, 16313, 20096, 5495, 210, 8128, 7304, -3657,
    -10995, -13886, -10367, 5297, 16267, 5554, -5377, 3428, 8813, -3401, -5890, 7393,
    5064, -11363, -10311, -100, -5134, -6218, 11206, 13270, -9153, -12161, 10857, 15211,
    -1775, -2959, 5901, -2357, -11790, -3083, 2179, -8761, -15945, -13428, -11811, -6521,
    2270, -1676, -11845, -6644, 4541, 5306, 9250, 18809, 8726, -13616, -11824, 6101,
    5315, -3889, 5677, 19204, 14884, 4216, -1114, -6770, -10930, -8458, -4578, 928,
    10048, 9179, -3609, -3414, 12442, 12746, -6272, -14295, -6924, -4186, -4389, 1252,
    915, -8566, -9169, 232, 1595, -4149, -1215, 8635, 11526, 5703, 1333, 5324,
    11214, 6279, -5646, -5510, 6085, 6614, -6400, -12392, -8633, -8934, -10517, -4632,
    75, -2074, -693, 3548, -2869, -13778, -9971, 4794, 11852, 9841, 7787, 3828,
    -4570, -8162, -1323, 7211, 8805, 4877, -666, -4769, -3130, 2482, 2524, -3086,
    -880, 11010, 15018, 4177, -5212, -2323, 2772, 181, -6160, -8439, -3809, 2764,
    1636, -5758, -5201, 3546, 3190, -6011, -4091, 8311, 10476, 2479, 1913, 7606,
    4851, -5802, -11757, -6892, 4548, 12185, 9962, 4728, 3000, -202, -3939, 2598,
    13141, 8692, -5798, -9475, -3678, -2363, -2457, 3577, 9248, 7204, -1248, -10655,
    -10841, 1771, 10354, 2687, -5219, -1280, 237, -5280, -2269, 5273, -556, -9566,
    -4017, 1299, -8620, -14626, -3157, 6313, 1324, -4597, -5465, -9305, -11236, -1530,
    7303, -1627, -15380, -9739, 8220, 12410, 3883, 3898, 9926, 4778, -3632, -149,
    3561, -1969, -645, 7544, -622, -16540, -10436, 3972, -3355, -13043, 1407, 14595,
    2452, -10507, -5541, 530, -5, 604, -3210, -11196, -4572, 13662, 16713, 3546,
    -2831, 3087, 11475, 15940, 10205, -2396, -3950, 4652, 656, -11861, -5996, 11919,
    13802, 3198, -385, 907, 2567, 10821, 17078, 7039, -14081, -21505, -8434, 11593,
    9434, -6854, -8069, 751, -142, 901, 15774, 21240, 4806, -6144, 1994, 6040,
    -1904, -2427, 5023, 3687, -2235, -1103, -769, -5335, -2990, 2926, -2367, -9194,
    -1891, 5153, -1729, -4908, 4464, 6153, -3757, -5525, 0, -1002, 133, 9067,
    5972, -10453, -12279, 1710, 5220, -603, 1110, 506, -9682, -8389, 6302, 6958,
    -4543, -2013, 5065, -6238, -16407, -1300, 17522, 16313, 8588, 6970, 4268, 2794,
    8184, 7633, -3253, -6593, -597, -2018, -5347, 3037, 6701, -7515, -14753, -548,
    9018, 1805, -123, 5786, -2023, -17110, -14119, 1971, 9191, 6140, 122, -7816,
    -8976, 4186, 16833, 13776, 5504, 5242, 6969, 3517, -975, -2288, 244, 5083,
    5559, 212, 177, 8929, 12740, 5191, -3972, -8904, -10710, -8108, -4506, -6139,
    -7165, -1272, 3176, 3300, 8184, 11263, -403, -11749, -5399, 1037, -7457, -11326,
    -1329, 1311, -8027, -10650, -5767, -4631, -3353, 447, -1583, -4889, 694, 6280,
    1777, -4727, -5973, -3808, 1070, 2505, -5585, -8354, 5405, 12915, -680, -10330,
    -3450, -2796, -11920, -10725, -4613, -6819, -2238, 13651, 15608, 2482, 596, 8333,
    6754, 2272, 3613, 174, -7044, -5963, -3635, -7189, -4780, 1679, -4674, -14539,
    -8213, 2203, -1861, -10581, -10082, -2652, 6003, 8071, -313, -2889, 8878, 9367,
    -10770, -16322, 2243, 4857, -15773, -18393, 2784, 11057, 925, -3155, -932, -6442,
    -12935, -7860, 2935, 4712, -5583, -12816, -3471, 8823, 4140, -4237, 4962, 15961,
    8997, 2914, 12840, 14966, -3687, -17184, -9895, 1074, 2874, 1592, 3533, 9262,
    14761, 11903, 2226, -530, 6822, 12437, 11056, 6565, -578, -7778, -5865, 5197,
    12163, 8090, 2186, 4736, 10614, 6994, -3525, -5103, 1661, 360, -6894, -4172,
    1950, -4468, -12930, -7502, 2236, 4548, 4244, 2749, -1411, 769, 7958, 3371,
    -9316, -9511, -55, 4430, 8086, 12196, 4031, -9958, -10950, -5231, -5084, -1160,
    8058, 7066, -329, 9, -387, -7343, -4721, 6826, 7184, 337, 1960, 4075,
    339, 3286, 10590, 8627, 5246, 7467, 1742, -8244, -2341, 8719, 3772, -4234,
    -3522, -8967, -14463, 2487, 20817, 7933, -12746, -7861, 4514, 2182, -1354, 892,
    -1836, -3708, 3883, 8608, 5227, 4975, 5827, 1063, 2276, 12954, 14928, 5913,
    3385, 6885, 4401, 520, -465, -7701, -16841, -11587, 1540, 3596, -713, 2867,
    7989, 4260, -798, 769, 3359, 4119, 7809, 10299, 2585, -9122, -12771, -13094,
    -17267, -13098, 5667, 15225, -330, -16953, -12090, -899, -2029, -9225, -14118, -15824,
    -8597, 3889, 2583, -11726, -14363, -1942, 4343, -267, -4425, -6551, -6678, 333,
    6994, 1811, -6898, -7078, -3761, -1875, 2520, 5927, 2650, -1311, -1851, -3288,
    -3304, 937, 681, -4768, -2199, 5584, 2521, -5283, -457, 10026, 9919, 3489,
    1671, 3709, 5941, 6045, 727, -5234, -1634, 8373, 10672, 1958, -6022, -3364,
    3022, -2648, -16469, -14541, 2450, 3363, -13737, -14291, 3619, 6627, -3812, -171,
    8593, 2008, -3279, 4817, 3193, -10938, -7429, 12976, 17609, 2959, -7853, -8046,
    -2604, 6991, 11852, 3967, -5250, -2762, 6503, 13398, 14113, 5785, -5772, -7766,
    -2257, -2652, -7831, -7118, -2194, -876, -3026, -5509, -6183, -1679, 6239, 8648,
    1403, -8735, -11846, -5525, 1427, 1349, 676, 4626, 2166, -9006, -9531, 3303,
    6973, 1367, 7372, 15999, 6111, -5714, 810, 7050, 771, 2211, 11208, 3163,
    -13246, -10726, 441, -2886, -11782, -11460, -6906, -2624, 294, -4280, -9190, -491,
    9383, 3362, -2424, 5656, 7236, -3884, -2174, 11021, 5083, -15085, -16686, -1546,
    4906, 3020, 6678, 11976, 10232, 4829, 1953, 3372, 7081, 7960, 5675, 6277,
    9087, 7688, 3244, -2685, -14081, -21505, -8434, 11593, 9434, -6854, -8069, 751,
    -142, 901, 15774, 21240, 4806, -6144, 1994, 6040, -1904, -2427, 5023, 3687,
    -2235, -1103, -769, -5335, -2990, 2926, -2367, -9194, -1891, 5153, -1729, -4908,
    4464, 6153, -3757, -5525, 9056, 8847, -2537, -10975, -2537, 3711, -4860, -5126,
    10101, 11758, -6062, -14253, -6347, -3248, -7405, -5336, 2332, 7847, 10189, 8018,
    1340, -2029, 1946, 6577, 5540, -1921, -12601, -17237, -9679, -208, -1524, -6273,
    497, 13980, 16065, 4751, -2641, 1821, 3565, -7085, -13813, -2099, 11791, 6961,
    -6825, -7753, 2417, 5121, -5180, -14361, -9686, 557, -585, -9498, -9405, -2793,
    -1510, 2055, 13535, 15136, 3051, 220, 7361, 2888, -5561, 190, 2816, -9987,
    -10743, 8230, 14531, 4107, 3923, 8322, -1695, -8587, 1258, 4979, -4224, -4544,
    2137, -576, -1695, 7523, 7175, -6961, -11852, -4778, -2139, -1321, 5592, 8479,
    2190, -3110, -5483, -10778, -15274, -13069, -5775, 2852, 6999, 2531, -2113, 1687,
    6272, 5768, 7626, 9383, -228, -11834, -8884, -629, -2137, -5330, -784, 3483,
    2388, 1440, 2072, 2851, 4166, 1564, -6367, -8489, -496, 4358, 934, 1538,
    8821, 9131, -1051, -7640, -2153, 5109, 2023, -5162, -3624, -209, -8988, -18762,
    -11377, -384, -6134, -14993, -8520, 1624, 4247, 8288, 11473, 1196, -11846, -10327,
    -3105, -3123, -5528, -8869, -16924, -18147, -4004, 9015, 7548, 1824, 345, -1231,
    -3522, -5884, -13634, -23327, -22536, -11786, -3053, -402, -1211, -4793, -8070, -5813,
    933, 5219, 2238, -3561, -832, 10206, 11760, -1692, -9378, -874, 6429, 3418,
    1767, 3482, 166, -3707, -1724, -18, -409, 2112, 2393, -4478, -9452, -6531,
    1197, 13199, 20274, 5509, -18120, -16454, 6651, 17682, 14078, 14268, 14260, 6905,
    2689, 1902, -3925, -4174, 7490, 11837, 3536, 955, 2738, -3618, -4551, 8508,
    12649, 2519, 3159, 13362, 9276, -1268, 2108, 8391, 4160, 65, -916, -7624,
    -10593, 354, 8489, 1262, -5595, -1197, 2107, -3998, -10018, -6122, 3292, 4808,
    -3031, -3312, 7849, 7374, -10285, -15842, -411, 8560, 4597, 7603, 11930, 389,
    -11461, -8655, -8931, -14837, -1982, 18934, 11877, -9558, -5846, 9590, 1540, -15148,
    -11106, -534, -4380, -9353, -3033, 2193, -554, -2792, -1778, 555, 5200, 6288,
    -588, -1854, 9573, 13429, 886, -3554, 8252, 9610, -4402, -6375, 4635, 4651,
    -78, 8306, 11846, -3600, -9165, 7283, 9331, -13496, -19916, 2879, 17596, 9517,
    1381, -465, -6993, -12218, -8437, -6446, -10162, -6964, 3172, 5027, -4036, -12658,
    -14467, -9649, -199, 6937, 5247, -975, -2760, -88, -267, -5245, -7587, -1537,
    5937, 3565, -5841, -8673, -2931, -601, -5753, -9060, -6978, -5999, -4419, 6234,
    16988, 8770, -9324, -7300, 12269, 15805, 509, -3054, 6827, 3010, -11843, -12258,
    -1717, 1577, 2862, 8016, 4178, -6343, -3584, 7456, 5374, -4849, -7218, -7875,
    -13122, -9691, 6110, 16198, 10470, -632, -3763, 3687, 11792, 9702, 3665, 6732,
    12720, 9265, 3470, 2286, -4744, -15585, -10717, 4899, 5586, -7184, -11841, -7047,
    -1788, 5649, 10879, 4458, -2589, 3675, 10645, 5927, 1844, 4363, 1046, -6107,
    -4195, -1723, -9744, -11967, 3343, 15572, 10811, 6984, 14129, 14598, 1819, -4429,
    4094, 8758, -1295, -10850, -7044, 445, 1524, 3552, 9826, 6263, -8408, -9700,
    8679, 15769, -1395, -10963, 2684, 9047, -4613, -6960, 10601, 14947, -221, -4503,
    3632, -1135, -12869, -9928, -1941, -2902, -762, 6994, 3834, -3848, 2470, 9716,
    -418, -12302, -9525, -1444, 5644, 11781, 5430, -9461, -6032, 12463, 14001, 1417,
    -296, 291, -8074, -4016, 12660, 9012, -8674, -4259, 9778, 652, -13261, -5262,
    4974, 338, -2675, 643, -1243, -1749, 5109, 6378, 3050, 8487, 10875, -4332,
    -17008, -8091, 6077, 7381, 737, -4441, -3459, 2394, 825, -10356, -10955, 3061,
    7725, 747, 5302, 16578, 10619, -3936, -3839, 5957, 11080, 12167, 10840, 7856,
    9056, 8847, -2537, -10975, -2537, 3711, -4860, -5126, 10101, 11758, -6062, -14253,
    -6347, -3248, -7405, -5336, 2332, 7847, 10189, 8018, 1340, -2029, 1946, 6577,
    5540, -1921, -12601, -17237, -9679, -208, -1524, -6273, 497, 13980, 16065, 4751,
    5373, -3898, -1472, 3960, -710, -4038, 2023, 934, -8683, -2493, 15409, 11877,
    -9090, -11291, 4840, 9309, 1039, -1931, -1214, -2733, 792, 8005, 6645, -2239,
    -8526, -10389, -7348, 2758, 10950, 5781, -5813, -8845, -4528, -4242, -6448, 743,
    14087, 13246, -5547, -17716, -9824, -725, -3790, -6931, -5622, -9274, -10281, 2770,
    12286, 1237, -11686, -7540, 1589, 4052, 6881, 11521, 10683, 4527, -3999, -11017,
    -5649, 10691, 15836, 3591, -4377, 1338, 8197, 10938, 9406, -2398, -15124, -9835,
    3386, 1803, -5300, -477, 4081, -1443, -464, 10147, 10092, -329, -912, 5630,
    596, -12319, -13752, -1397, 8087, 2860, -9717, -14024, -7074, 2519, 10958, 15562,
    7958, -6207, -5704, 8162, 10370, 409, 865, 7745, 137, -11807, -5855, 6867,
    5588, -382, 4082, 8332, -447, -11144, -9170, -1155, -1502, -8303, -9548, -5386,
    -4688, -4860, 1232, 5778, 575, -2714, 4992, 9211, -1083, -13281, -15809, -12558,
    -6959, -651, -634, -5555, -3955, 2980, 4407, 2980, 4704, 1501, -8490, -9485,
    2716, 11593, 9347, 3671, -2267, -8286, -7935, -2049, -2129, -7360, -3077, 10068,
    12581, -992, -11417, -6472, -84, -5954, -13228, -7569, 2641, 3141, -918, 2644,
    11714, 16001, 10936, 655, -4235, 885, 3945, -3823, -9206, -4389, -5677, -16431,
    -14455, 102, 1209, -7993, -3511, 4313, -4406, -8283, 11763, 26227, 13422, -584,
    250, -3414, -13176, -8439, 4610, 5519, 823, 552, -7746, -23198, -19800, 4252,
    17717, 9527, 1462, 3925, 2701, -8483, -15871, -9423, 2862, 8747, 6746, 1916,
    -3090, -5689, -2532, 2413, 2002, 187, 3785, 5270, -1726, -3190, 10171, 19869,
    10886, -1731, -2792, -997, -4081, -3332, 4874, 10289, 6432, -1081, -2704, 3990,
    8833, 3597, 565, 12359, 22306, 11078, -5835, -7530, -3355, -3261, 2583, 9804,
    1323, -10381, -4429, 1429, -11345, -16819, 2423, 14835, 2986, -2159, 13593, 20612,
    5031, -9798, -8458, -45, 5481, 6140, 3928, 4073, 7967, 10919, 11209, 7885,
    -3898, -18743, -20202, -7592, 1875, 1989, 184, -1673, -4212, -3875, -2742, -4189,
    -1759, 5848, 7244, 1356, -1761, -4663, -11494, -9909, 1357, 1508, -9605, -7382,
    6063, 4405, -9800, -10806, 4076, 17275, 18939, 9318, -2521, -3044, 2742, -2918,
    -11810, -1801, 14280, 8843, -5412, -278, 12869, 7890, -6493, -6959, 4037, 9769,
    7385, 5313, 6593, 5417, -1085, -3604, 5864, 16153, 12511, 2604, 2114, 6528,
    3925, -403, 2752, 7098, 5891, 6770, 13902, 14722, 1345, -11495, -7272, 6489,
    11092, 4619, -1698, -4503, -6455, -4742, 785, 1600, -3326, -2708, 5288, 7130,
    -1793, -8053, -2978, 4002, 2542, -2701, -2482, 997, -136, -4070, -2910, 2434,
    4213, 1437, 168, 2883, 4609, -499, -8988, -9239, 27, 4861, 1496, 2539,
    5928, -3537, -14735, -4631, 11726, 6767, -4539, 1449, 7682, -1823, -6932, 701,
    1253, -5111, -2847, -1791, -10796, -9704, 4992, 5368, -10600, -14232, -2775, 1353,
    -6458, -14501, -13644, 654, 16891, 13152, -3807, -5085, 7537, 9454, 1966, -1071,
    -4402, -9060, -4164, 2772, -1552, -5017, 1520, 811, -11822, -16368, -9197, -5132,
    -6057, -6823, -7670, -3392, 6457, 6012, -6654, -11201, -5736, -6449, -7831, 2945,
    13732, 13586, 12998, 14820, 11114, 6934, 6452, 2021, -270, 10602, 19092, 11740,
    6002, 7362, -4449, -21533, -14672, 5174, 7870, 703, 887, -400, -6026, -3832,
    -419, -6591, -8390, 1203, 3380, -6282, -10125, -6249, -6158, -8548, -8008, -4616,
    3815, 11753, 5694, -5692, -320, 12323, 7612, -4198, -716, 6496, -964, -10776,
    -6844, 2468, 4189, -460, -3833, -2019, 510, -3596, -9044, -3711, 6197, 4066,
    -4723, -1448, 9509, 6680, -10171, -17434, -4685, 8911, 5373, -3898, -1472, 3960,
    -710, -4038, 2023, 934, -8683, -2493, 15409, 11877, -9090, -11291, 4840, 9309,
    1039, -1931, -1214, -2733, 792, 8005, 6645, -2239, -8526, -10389, -7348, 2758,
    10950, 5781, -5813, -8845, -4528, -4242, -6448, 743, -1029, 14237, 18807, 6600,
    -8892, -14610, -14709, -17261, -15160, -1151, 9820, 2718, -7466, -1573, 8142, 4122,
    -2649, 188, 448, -6908, -4150, 9582, 10582, -2334, -4411, 5023, 2294, -11293,
    -11237, 3469, 10141, 2128, -5494, -2236, 7714, 14785, 14087, 10425, 10967, 12502,
    7642, 842, 1820, 8278, 10476, 5819, -616, -2001, 4566, 11426, 8122, -1327,
    -5525, -5522, -5849, -661, 8000, 4501, -7848, -6425, 5763, 3395, -8752, -2860,
    15712, 16973, 1995, -3003, 4954, 7461, 886, -2676, 795, 3779, 816, -5192,
    -8103, -5486, 567, 5742, 4400, -3773, -7507, 439, 6427, -1313, -6823, 4670,
    15395, 8905, 2037, 7616, 7712, -5347, -9697, 2025, 8801, 2894, -761, 2675,
    4918, 6169, 10235, 11315, 4537, -4259, -7915, -6059, -3106, -3590, -5517, -940,
    9619, 13097, 3839, -5596, -3464, 4833, 8103, 4751, -770, -6086, -7897, -1375,
    8438, 7353, -4160, -6016, 7379, 13974, 3570, -3957, 780, 346, -9090, -9728,
    -2886, -4907, -6397, 8271, 18311, 1576, -16484, -5827, 12638, 6848, -11400, -16345,
    -12642, -13583, -12730, -4206, 1376, -1607, -3867, -497, 3114, 4818, 5618, 2111,
    -5365, -8524, -6081, -5976, -7044, -1115, 6092, 3315, -1345, 6988, 20453, 19110,
    1773, -14288, -14984, -1505, 10662, 7505, -4154, -7130, -1460, 1348, 1726, 4331,
    5017, 5212, 12009, 16017, 5334, -4780, 2312, 9708, -792, -13201, -9296, 1509,
    7528, 11215, 10782, 893, -9860, -8793, 1740, 9631, 7964, 1008, -942, 3179,
    2643, -4469, -7626, -6201, -7403, -6480, -209, -651, -8355, -7017, 559, -934,
    -2006, 8040, 8979, -7057, -11564, 1491, 2253, -9490, -4402, 12681, 15041, 7025,
    4505, 2454, -1712, -264, 1083, -4457, -7176, -4875, -5924, -2448, 11354, 14713,
    -585, -10161, -4970, -284, 5215, 15500, 11347, -6003, -3674, 14994, 12663, -4255,
    -2182, 7358, -142, -7266, -642, -1184, -9372, -2882, 6188, -4821, -15241, -4092,
    5395, -2002, -4073, 6057, 8072, 1237, 1137, 5136, 6527, 11602, 16463, 7368,
    -7479, -7987, 1918, 4573, -269, -2320, -939, -522, -1520, -3999, -7822, -8978,
    -5283, -1870, -3282, -5637, -4567, -4782, -11094, -15288, -6213, 9827, 14340, 2232,
    -11535, -12745, -5237, -1826, -3206, 1311, 10448, 9743, 604, -159, 3317, -7616,
    -21232, -11053, 9227, 7550, -6774, -6898, -1266, -6501, -10362, -4905, -5295, -11124,
    -4446, 8879, 8613, -1430, -6347, -6657, -6022, -2924, -1921, -5237, -3965, 2993,
    5559, 4377, 5687, 3428, -4240, -3840, 5574, 6348, -3871, -8088, -1202, 6436,
    9738, 10999, 11659, 11336, 7408, -113, -2269, 5699, 12515, 9851, 5289, 2324,
    -5295, -12651, -8809, 105, 2005, -307, -308, 334, -261, -4060, -13244, -16720,
    -1691, 16588, 14674, 3289, 5229, 11049, 2380, -9732, -9514, -5936, -9038, -10655,
    -5333, -1187, -3089, -5779, -4141, 771, 4645, 5468, 4428, 800, -5422, -6328,
    1525, 4125, -6065, -10132, 2794, 9470, -5376, -18456, -11546, -2441, -5811, -8489,
    -2642, 173, -1449, 4374, 12726, 5881, -11735, -16664, -5283, 2388, -1303, -4490,
    -5022, -11013, -14414, -3394, 7694, 2402, -3602, 5503, 12311, 3592, -2955, 1615,
    2721, -301, 3398, 4196, -6772, -13357, -9997, -13095, -17041, -2867, 10666, -3957,
    -24882, -19295, -200, 8745, 11966, 12500, 2473, -7721, -5140, -2597, -7659, -3394,
    9865, 8571, -4205, -3536, 6068, 2988, -5786, -2864, 2889, -1782, -7163, -3147,
    782, -4213, -10106, -6183, 5074, 11087, 3928, -8683, -10998, -229, 8785, 4818,
    -4402, -6021, -1262, 1081, 2300, 8492, 13573, 7770, -2286, -3758, 405, 1265,
    1452, 3443, 1736, 920, 11781, 22705, 13078, -5516, -5212, 8637, 9383, -2534,
    -6865, -3321, -5242, -8911, -1029, 14237, 18807, 6600, -8892, -14610, -14709, -17261,
    -15160, -1151, 9820, 2718, -7466, -1573, 8142, 4122, -2649, 188, 448, -6908,
    -4150, 9582, 10582, -2334, -4411, 5023, 2294, -11293, -11237, 3469, 10141, 2128,
    -5494, -2236, 7714, 14785, -4047, -3172, -2597, -10044, -9189, -291, -808, -8111,
    -6555, 2796, 9170, 9409, 4970, -538, -1408, 1501, 2097, 284, -1845, -6017,
    -8370, -1967, 5904, 2880, -5033, -5482, -3702, -8323, -10927, -3468, 3834, 1611,
    -1559, 2835, 6430, 618, -5283, -202, 5709, -3637, -19434, -19175, -4323, 3247,
    -498, 932, 10801, 14168, 6642, 551, 1287, 759, -2947, -205, 9937, 14032,
    7860, 4168, 6616, 3559, -2919, 2225, 11883, 6295, -5399, -2420, 4820, -15,
    -2490, 6804, 6219, -9569, -14173, -3599, -1352, -6469, -1153, 5196, -2809, -11135,
    -5013, 5164, 9549, 10564, 6819, -599, -1614, 1668, -3253, -10567, -5847, 3619,
    3064, -3200, -4769, -2110, 1209, 3121, 2223, 2409, 4251, -2309, -14416, -9295,
    13609, 22301, 6433, -6799, -4672, -3947, -10157, -11173, -6035, -2563, -2, 3252,
    3714, 2659, 3266, 2969, 2291, 6008, 9290, 4146, -2271, 61, 2737, -4628,
    -10126, 1419, 18439, 19779, 10559, 10357, 15340, 7885, -5040, -4489, 857, -6466,
    -12538, 79, 11694, 1542, -12028, -9947, -6034, -10516, -9715, -207, 4532, 3409,
    3801, 2402, -1828, -627, 3957, 2050, -3172, -3001, 1501, 7306, 12013, 8031,
    -3522, -7869, -2564, -261, 467, 9073, 14574, 4634, -5528, -429, 7905, 6708,
    2729, 701, -3633, -6550, -2810, -362, -4792, -5720, 3306, 10580, 5926, -2641,
    -3651, 381, 2295, 4897, 10812, 10522, 178, -5100, 2490, 7470, 1644, -2329,
    -2201, -9069, -15046, -5523, 5474, -595, -10821, -9125, -4361, -3130, 1637, 5348,
    -239, -3776, 2109, 2600, -5413, -2947, 11041, 14919, 4202, -3977, -697, 7809,
    12185, 7911, 1054, 492, 1459, -4316, -9023, -3870, 3632, 7371, 10363, 7966,
    -2114, -3644, 8458, 11475, -1254, -5168, 5572, 7708, -2611, -5925, -66, 1617,
    -2104, -4912, -4358, 1443, 7317, 2633, -4277, 5400, 19273, 7460, -20397, -26815,
    -10306, -1072, -3306, 2733, 12991, 6817, -8021, -6293, 6837, 5684, -6264, -4544,
    7651, 8604, 2202, 3885, 4780, -4601, -8060, 1429, 4212, -4687, -7481, -3275,
    -4092, -4423, 882, 138, -5104, -270, 5370, -3050, -8804, 1144, 4781, -6688,
    -8435, 2812, 2702, -4819, 3770, 18797, 15450, -233, -8006, -5092, 1582, 5735,
    2699, -897, 5008, 11413, 4339, -6966, -7370, -2460, -2178, -2915, -1026, 582,
    2327, 5208, 5150, 956, -2490, -737, 6401, 11246, 3492, -10126, -10303, 482,
    835, -7481, -3342, 10130, 11200, -550, -8136, -5873, -243, 997, -5423, -10442,
    -2789, 8227, 5345, -6787, -12911, -11347, -5459, 2798, 4300, -3027, -4878, 713,
    -729, -5127, 35, 671, -13313, -16257, 3029, 14472, 6748, 4500, 11328, 8425,
    -221, -2844, -6258, -9384, -1851, 3830, -3809, -4953, 7240, 7172, -5702, -3217,
    10777, 12407, 7897, 7722, 31, -10917, -6259, 1680, -5151, -9766, -3361, -7082,
    -16259, -6083, 6354, -4032, -10850, 5845, 11360, -9251, -18800, -6241, -831, -4299,
    2313, 9306, 4095, 857, 5595, 5724, 2362, 3412, 2964, 166, 2433, 2716,
    -3772, -640, 14154, 17356, 7044, 3413, 3934, -3565, -8475, -5915, -10996, -18699,
    -10821, -1234, -8193, -11572, 2295, 7427, -4918, -5897, 9070, 11543, -2371, -10495,
    -7385, -2752, -1235, -4492, -7815, -1509, 5878, -2659, -14398, -6220, 9532, 9891,
    2490, -350, -3894, -4481, 5223, 8311, -4411, -8001, 4363, 3132, -11971, -7457,
    11578, 10973, -3109, -4888, -2388, -5766, 334, 11384, 1039, -19562, -15789, 5097,
    11680, 4800, 1780, 2074, 2727, 7715, 10236, 1812, -8502, -10366, -7957, -6132,
    -3587, -532, 2864, 5581, 1092, -9193, -10998, -2619, 1564, 1028, 5567, 8240,
    1779, -1597, 468, -6192, -11996, 3327, 19088, 6158, -11285, -207, 16844, 9545,
    -4047, -3172, -2597, -10044, -9189, -291, -808, -8111, -6555, 2796, 9170, 9409,
    4970, -538, -1408, 1501, 2097, 284, -1845, -6017, -8370, -1967, 5904, 2880,
    -5033, -5482, -3702, -8323, -10927, -3468, 3834, 1611, -1559, 2835, 6430, 618,
    628, -7005, 4673, 20291, 15391, 77, -6097, -6786, -9814, -9361, -1477, 7266,
    9659, 4390, -1896, 280, 7655, 6317, -3291, -5202, 3715, 9406, 5308, -945,
    -2008, 2502, 7510, 6668, 2088, 2955, 8679, 8829, 2466, -1659, -1916, -2296,
    -1761, 414, 252, -1656, -77, 3221, 915, -7408, -13687, -11514, -4258, -1495,
    -5223, -6160, -500, 2457, -1017, -1066, 5107, 6447, 13, -3703, -2332, -4792,
    -10510, -8651, 39, 2487, -3267, -5270, -1221, -1666, -6360, -4026, 2402, 527,
    -4430, -94, 6829, 7226, 9782, 16444, 12657, 1362, 1893, 8996, 3089, -8407,
    -8734, -5346, -6036, 296, 13318, 15527, 5008, -6179, -15280, -20615, -15985, -7947,
    -6898, -5782, 2636, 9542, 10477, 9569, 2668, -8990, -8986, 2087, 3702, -2799,
    -879, 1591, -5673, -5013, 8811, 8480, -10491, -16288, -748, 9633, 3276, -7365,
    -12696, -9853, -1221, 2198, -2325, -3467, -1881, -8878, -14957, -3168, 13726, 13516,
    3156, -74, 755, -2340, -4272, -850, 2511, 2129, 289, -1102, -2211, -2811,
    -1530, 2140, 5275, 4339, 399, -2934, -3821, -1526, 2593, 4802, 5387, 6802,
    4495, -3599, -5752, 3202, 8134, 1532, -3928, -4019, -7044, -9818, -7331, -7786,
    -9233, 736, 10699, 4098, -614, 11759, 15017, -2245, -7306, 7894, 10225, -3202,
    -4045, 4120, 1173, -2962, 2201, 1420, -7955, -7805, 2364, 8464, 8211, 2952,
    -6259, -7119, 4364, 10176, 3791, -144, -1033, -8483, -12042, -3044, 1760, -4538,
    -4125, 5184, 5743, -1588, -2188, 2298, 3489, 3381, 4034, 4127, 6254, 9062,
    5435, -1703, -1574, 5754, 10806, 8746, 1574, -5509, -8189, -7169, -3897, 1292,
    1975, -4197, -1417, 16286, 21633, 825, -13218, -193, 9399, -2537, -7915, 5346,
    9585, -4156, -10977, -1888, 5350, 1550, -4335, -3553, 2126, 3340, -4339, -11017,
    -5606, 6207, 8894, -3140, -17573, -15602, 1711, 9364, -877, -4030, 7760, 7218,
    -8760, -8286, 8853, 11033, 916, 2087, 3982, -7041, -9258, 4931, 5865, -12429,
    -19983, -9594, -372, 4958, 12499, 14156, 6177, -838, -2030, -1127, 369, 653,
    -1305, -2277, -4381, -10560, -8804, 7859, 18456, 8027, -2876, 3679, 13100, 10218,
    1616, -3279, -1917, 4450, 7463, 2790, 835, 4476, 165, -9801, -5680, 9292,
    12768, 3518, -4350, -8215, -7863, -446, 3748, -2891, -3899, 9215, 13563, -1436,
    -9613, 3392, 13906, 5361, -4030, 2643, 11890, 5052, -9477, -9511, 5230, 13252,
    5553, -3943, -3647, 1592, 1995, -5513, -13595, -11322, -2483, -2451, -8427, -3776,
    4679, -1740, -12491, -9969, -8041, -17388, -16970, -3598, -6955, -24893, -19828, 5981,
    12059, -4531, -9888, 3319, 13400, 11022, 3352, -2661, -3016, 868, 1965, -1675,
    -6233, -10447, -11658, -4987, 4175, 5141, 923, 1253, 3699, 1795, -453, 2322,
    6334, 5937, 1596, -2327, -3583, -4552, -6333, -4834, -261, 1224, 2602, 10286,
    12422, -1983, -12455, -958, 8987, -2142, -8094, 8149, 15870, -1028, -11584, -1927,
    1245, -9150, -8885, 3664, 6403, -214, 1557, 10147, 12556, 9798, 7962, 3761,
    -3522, -3803, 6784, 15109, 10125, 1298, 2435, 7432, 3023, -4608, -1683, 6171,
    6250, 3281, 5068, 3367, -7127, -14621, -13481, -13780, -15856, -7677, 5476, 4037,
    -9077, -10639, 1886, 7048, -1621, -7318, -1874, 4459, 5139, 3452, -310, -6434,
    -7683, -887, 3833, -1597, -10359, -11081, -1062, 11915, 14906, 3426, -9113, -7861,
    2705, 9841, 11984, 11591, 7023, 3060, 6775, 10335, 3781, -3759, -2747, -2743,
    -7916, -4058, 8722, 8958, -5496, -11634, -3263, 2223, -1237, -2401, 3300, 8738,
    6808, -2468, -8804, -2317, 7221, 3280, -6211, -4199, -432, -10045, -18008, -9233,
    -469, -2658, 2077, 15775, 14377, -369, -2007, 5826, 628, -7005, 4673, 20291,
    15391, 77, -6097, -6786, -9814, -9361, -1477, 7266, 9659, 4390, -1896, 280,
    7655, 6317, -3291, -5202, 3715, 9406, 5308, -945, -2008, 2502, 7510, 6668,
    2088, 2955, 8679, 8829, 2466, -1659, -1916, -2296, -8759, 8327, 15015, 12543,
    11188, 727, -17252, -16001, 2700, 4688, -10012, -7994, 11289, 19420, 12799, 5819,
    -974, -8273, -9400, -9086, -13728, -11400, 3883, 14504, 12029, 9731, 10077, 3872,
    -1391, 3934, 7414, 1146, -846, 4068, 1846, -1992, 6163, 10561, -4181, -15086,
    -5287, 288, -11879, -15721, -2290, 3608, -2131, -733, 2887, -5001, -10152, -718,
    5188, -1552, -3612, 2606, 507, -9927, -13525, -8862, -3912, 538, 5591, 8493,
    6234, -2389, -11068, -8187, 2316, 2441, -6394, -4761, 5819, 6752, -755, -3543,
    -3356, -3478, 2467, 9230, 3375, -7698, -7129, -263, -1973, -8087, -5156, 5120,
    7501, -4879, -17723, -14152, -1829, 1813, 1601, 6283, 1447, -15920, -16101, 7463,
    18445, 5673, -1139, 2943, -3034, -9896, 401, 8439, -1972, -8420, -1480, -4540,
    -16925, -11107, 7506, 9055, -2448, -1111, 10042, 9985, -358, -5904, -5440, -5475,
    -3008, 4286, 6284, -443, -251, 11661, 13875, -155, -4610, 7605, 8223, -8568,
    -13979, -3268, 149, -4029, -1102, 1537, -2701, 151, 8575, 3849, -5450, 2190,
    14207, 8937, -2052, -2167, 864, 1426, 6425, 11112, 6191, -147, 503, -71,
    -5018, -2762, 9036, 17278, 15848, 12083, 9752, 2873, -9488, -15129, -6237, 4458,
    1758, -7407, -8056, -3365, -4978, -10961, -11687, -5419, 1614, 2456, -3022, -6253,
    -3348, -2576, -7743, -10669, -7893, -3101, 4313, 10345, 3533, -10050, -9879, 1854,
    5762, 2798, 5233, 9528, 10351, 11179, 7873, -955, 986, 14358, 12407, -6102,
    -7656, 12082, 18995, 2563, -11233, -5538, 8856, 11465, -3513, -13989, -823, 11506,
    -6311, -28050, -17503, 3373, 2504, -3025, 4443, 6811, -107, 1990, 5712, -4532,
    -11105, -1672, 704, -10227, -8305, 6059, 4435, -9007, -5470, 10418, 11153, -1415,
    -3485, 5649, 5482, -5731, -7247, 4769, 7946, -5135, -13039, -6235, -1448, -6077,
    -9448, -8254, -4630, 4647, 12256, 5569, -3781, 2173, 11292, 7329, 2527, 7099,
    9511, 7546, 9693, 8027, -3167, -7053, 1339, 3368, -2542, -1057, 1918, -6425,
    -13434, -4876, 9288, 15938, 13036, 2073, -7463, -4452, 1834, -1785, -2939, 9257,
    14967, 1186, -10849, -6763, -2072, -5240, -2906, 8633, 14304, 6756, -2318, -1266,
    3244, -2535, -12812, -8882, 5133, 6646, -3264, -3483, 4915, 3781, -5929, -10906,
    -9965, -6883, -1982, 303, -2759, -5833, -7905, -10990, -7724, 2884, 5263, -1867,
    1404, 15251, 17418, 5737, -2865, -4306, -1264, 7302, 10710, -358, -8351, -101,
    4461, -4027, -1990, 13585, 13732, -2440, -5561, 5176, 6117, -2259, -3670, 1414,
    5423, 7820, 7573, 6336, 9729, 9899, -4992, -20074, -13552, 1061, -1738, -13062,
    -10827, -752, 1282, -1120, 333, 1578, -555, -508, 4330, 8901, 8152, 3455,
    1540, 4106, 2209, -7625, -12255, -4708, 407, -5129, -6940, 186, -331, -10810,
    -11791, -1928, -1058, -9105, -7196, 2434, 1231, -8128, -7863, 1126, 3586, -2774,
    -8134, -8797, -8525, -8887, -7471, -3224, -509, -4616, -10709, -6411, 6963, 10305,
    -3747, -15909, -10709, 406, 3797, 4976, 7737, 3066, -5283, -89, 13154, 10763,
    -3396, -3037, 10996, 13669, 675, -11540, -15579, -11891, -196, 10821, 10672, 3972,
    -2401, -10175, -12500, -465, 10542, 4056, -3338, 4623, 11746, 8089, 8924, 13058,
    4428, -4335, 6041, 18572, 13733, 3268, -3601, -10874, -7463, 9789, 11197, -10999,
    -18624, -364, 8089, -2266, -4433, 3176, 3396, 1761, 4192, -620, -7424, -624,
    6356, -3420, -11939, -3028, 5794, 1444, -3792, -2417, 695, 4754, 7924, 5537,
    3629, 8543, 11300, 5734, 1035, 2396, 4828, 6145, 4594, -2627, -8214, -4908,
    -1239, -2752, 360, 7873, 6157, -2273, -4193, -2508, -3580, -1045, 5318, 6909,
    6380, 6707, -1485, -13464, -8759, 8327, 15015, 12543, 11188, 727, -17252, -16001,
    2700, 4688, -10012, -7994, 11289, 19420, 12799, 5819, -974, -8273, -9400, -9086,
    -13728, -11400, 3883, 14504, 12029, 9731, 10077, 3872, -1391, 3934, 7414, 1146,
    -846, 4068, 1846, -1992,
];

pub(crate) static REFERENCE_Q: [i16; TABLE_LEN] = [
    -16570, -9371, 7628, 9436, -2096, -6882, -2348, 1212, 1523, 316, -4460, -11546,
    -13539, -6923, 717, -797, -8165, -7443, 1987, 4127, -5239, -11208, -7380, -3247,
    -3173, -4631, -8942, -12459, -6262, 2711, -779, -9254, -4472, 6961, 6787, -334,
    1761, 11426, 15084, 7838, -3592, -9131, -5511, 173, 2583, 5311, 7882, 3171,
    -5602, -7356, -2372, 2840, 9159, 14869, 12177, 4417, 1014, -2207, -8717, -5537,
    7587, 5539, -15825, -23687, -5768, 6171, -5378, -14613, -3729, 7652, 3745, -2688,
    -1408, 232, 93, 2453, 346, -8993, -8196, 7741, 14218, 2126, -4378, 2151,
    1009, -6907, -1510, 8641, 4732, 427, 9145, 11398, -1292, -7306, -3864, -9185,
    -14802, -2537, 11426, 8104, 3371, 10100, 11333, -863, -8397, -1672, 7384, 7611,
    1579, -19, 6972, 11360, 5326, 885, 4354, 1019, -9470, -5707, 8420, 5842,
    -7970, -4597, 10462, 11633, 2218, -599, 1007, 67, -783, -3000, -10258, -15572,
    -11589, -1786, 7535, 11925, 8081, -360, -4869, -2577, 3407, 7569, 3976, -3152,
    -559, 10655, 15420, 12897, 11900, 7651, -906, 2259, 14715, 10950, -7204, -11908,
    -3211, -1848, -5131, -2693, -2581, -5798, -156, 7346, 1761, -5941, -1598, 3559,
    135, -2036, -56, -2148, -6760, -8846, -11035, -10788, -2165, 6133, 2735, -4899,
    -5049, -1407, -626, 857, 5154, 4324, -5068, -9742, 1473, 13132, 4700, -9573,
    -4058, 6567, -4469, -18332, -7246, 7777, 2364, -1694, 10445, 13207, 488, 358,
    11933, 7507, -6704, -3975, 11056, 18486, 17202, 10780, -1920, -11203, -7156, 74,
    -2021, -6190, -699, 9119, 9384, 825, -258, 10175, 13091, 949, -3732, 10383,
    19860, 9625, -2661, -2489, 3497, 8049, 8146, 2808, 2176, 11489, 13766, 2707,
    -360, 6844, -128, -15950, -12126, 2627, 2131, -3341, 2826, 6535, 971, 2348,
    8715, 3894, -4680, -2949, 2573, 5434, 8680, 7670, 763, -560, 3386, 762,
    -3333, -1408, -5519, -16066, -12005, 2800, 1654, -11381, -12543, -6692, -7611, -3991,
    10847, 17749, 6370, -9210, -15389, -9134, 5549, 14380, 6426, -7472, -11313, -6693,
    -1952, 1093, 533, -4522, -7044, -3162, -732, -5196, -9891, -7992, -3240, -3069,
    -6341, -5434, -1032, -1625, -4432, 1712, 11112, 7929, -3615, -8251, -7566, -8194,
    -4657, 2678, 3578, 1724, 7019, 10609, 2559, -5466, -2569, 4126, 8224, 10920,
    10470, 6964, 3920, -1871, -10128, -8336, 3220, 6016, -899, -445, 4813, 973,
    -4638, -2020, -1680, -8142, -8232, -1153, -219, -4930, -4576, 2563, 12301, 18700,
    14672, 4952, 2512, 5015, 1927, -2237, -1368, -1737, -1610, 6056, 7252, -8659,
    -16006, 2953, 18485, 7542, -5125, 138, 3931, -5807, -11046, -2114, 7083, 5976,
    -133, -1631, 3483, 6203, -1134, -9790, -7047, 1822, 2717, -5396, -11958, -7952,
    5449, 13277, 3463, -9774, -4687, 9935, 10899, 2506, 2618, 6936, 5225, 6428,
    15156, 14869, 743, -4808, 8453, 17281, 4632, -9821, -3598, 9743, 5488, -9005,
    -10525, -2377, -3157, -8609, -1713, 13382, 18516, 8797, -6493, -15377, -10111, 2138,
    3522, -6734, -9467, 83, 4591, -2617, -8740, -6598, -654, 6695, 12904, 10152,
    -1742, -10074, -6852, 409, 1391, -2414, -1333, 6629, 10336, 1894, -8633, -7228,
    2515, 7391, 6452, 7591, 9166, 3141, -6743, -6918, 4026, 10127, 1765, -8733,
    -7343, -1177, -3661, -9503, -6462, -930, -6832, -17414, -14234, 113, 4350, -6032,
    -11811, -4121, 1876, -1726, -957, 7876, 6160, -8503, -11815, 850, 3659, -8580,
    -10293, 2889, 6505, -3643, -7533, -2583, -2633, -7371, -8925, -9095, -8247, -2903,
    519, -1983, 1205, 10971, 8220, -6543, -8791, 1121, -1288, -13336, -12996, -5658,
    -6588, -3966, 10816, 16415, 3828, -4591, -2111, -7069, -16570, -9371, 7628, 9436,
    -2096, -6882, -2348, 1212, 1523, 316, -4460, -11546, -13539, -6923, 717, -797,
    -8165, -7443, 1987, 4127, -5239, -11208, -7380, -3247, -3173, -4631, -8942, -12459,
    -6262, 2711, -779, -9254, -4472, 6961, 6787, -334, -2832, -4885, -2574, 1129,
    -1304, -6348, -7756, -11010, -16337, -9423, 7475, 9745, -4375, -7882, 3658, 8016,
    5135, 12432, 20377, 9737, -5464, -2865, 7079, 5352, -1838, -2183, 1068, 2060,
    795, -3644, -9579, -10115, -3720, 4914, 13169, 16429, 7924, -5770, -8521, -384,
    3603, -206, -2888, -1689, 252, 1961, 553, -5559, -7672, -484, 3275, -4982,
    -9009, 4025, 15642, 6540, -7919, -5409, 3339, -2560, -13910, -11450, -3638, -6137,
    -7729, 4484, 12942, 864, -13946, -11169, -1959, -2290, -5202, -1134, 3668, 1832,
    -4202, -8654, -7737, -3706, -3158, -2571, 8438, 20159, 10963, -9849, -11049, 5363,
    8023, -7640, -17063, -11857, -4929, -3183, -4119, -4589, -617, 6794, 9366, 6178,
    5132, 6028, 3594, 1394, 1907, -1242, -7044, -7135, -4761, -5799, -2168, 8458,
    10865, 1995, -1744, 1426, -3110, -13395, -15129, -10003, -8255, -9117, -8985, -10059,
    -12757, -15022, -15252, -9124, 2651, 7342, 15, -4234, 3489, 10155, 5215, -4439,
    -9188, -5169, 5913, 12487, 4879, -6416, -6284, 249, 1077, -3032, -7274, -9057,
    -2104, 12235, 18166, 9469, -838, -4651, -5307, -2863, 1142, 342, 248, 8579,
    10549, -5094, -14970, -1513, 11446, 4215, -6496, -8083, -8419, -4100, 10149, 14803,
    156, -8229, 496, 712, -13361, -13821, 2554, 7555, -1921, -303, 15739, 22077,
    9488, -4183, -3540, 4711, 6220, 944, -795, 1737, 599, -3170, -992, 7653,
    14992, 14447, 5033, -5296, -5597, 1317, 3272, 1080, 1994, -428, -9822, -11166,
    -987, 210, -10928, -11753, 318, 3123, -6150, -9714, -3562, 3386, 6643, 3299,
    -4759, -5099, 3973, 5131, -6054, -12106, -5654, 4251, 12389, 13891, 1810, -12423,
    -9560, 2591, 4464, 1227, 4503, 5737, -227, -1249, 4674, 5697, 475, -5341,
    -11511, -13247, -6295, -4205, -16806, -25293, -12146, 8277, 14137, 4543, -7025, -7510,
    1750, 1535, -12987, -14859, 5040, 12945, -3555, -9431, 5119, 6111, -8658, -4990,
    13090, 12448, -1703, -4514, -2497, -7447, -7608, 833, 5987, 10008, 16478, 9912,
    -8916, -10808, 6947, 11253, -3616, -8364, 1664, 4146, 175, 7340, 17508, 12787,
    2641, 2792, 3538, -4886, -6816, 5943, 11617, -29, -5102, 6743, 11095, 98,
    -2279, 6238, 1986, -9920, -5739, 3426, -2409, -4807, 9409, 10559, -11528, -18209,
    2493, 12295, -1166, -8347, -2634, -3421, -7444, -353, 9783, 12708, 14134, 14509,
    7889, 1269, 2325, 4069, 2512, 3364, 4539, 827, -1099, 3384, 5933, 3020,
    859, -370, -3760, -5289, -3236, -1586, 1979, 10177, 13754, 6659, -717, 232,
    4248, 5969, 5861, 3628, 151, -2268, -5281, -7156, 417, 14013, 18008, 12317,
    10662, 10299, -235, -11629, -8889, 310, 2525, 510, -1298, -5768, -9281, -5655,
    -891, -2219, -4720, -3685, -2981, -3930, -2998, -424, 1234, 1133, -2256, -7673,
    -7225, 2920, 13857, 14447, 4870, -3356, 234, 9321, 5495, -11156, -16237, -2562,
    4079, -8195, -14685, -587, 13177, 9465, -998, -6052, -7009, -5491, -2049, -623,
    331, 5684, 9983, 7279, 6397, 12878, 13007, -741, -11446, -5843, 4669, 7164,
    5832, 6492, 5699, 1431, -3793, -9667, -13579, -8292, 2806, 4419, -3602, -1609,
    12971, 15715, -371, -8950, 1010, 5356, -5296, -6408, 8451, 11521, -3588, -7711,
    6551, 11282, -1433, -6738, 3257, 8294, 1385, -2951, -621, -1402, -4957, -2403,
    4655, 8283, 8796, 9090, 5485, -2161, -4179, 2104, 4438, -2173, -4176, 4524,
    8269, -1378, -8998, -5186, -2719, -7520, -7390, -767, -608, -5560, -3739, 668,
    -63, 3986, 15606, 14083, -6032, -18096, -9411, 527, 2209, 7038, 11985, 4468,
    -4138, 1262, 4563, -10428, -22643, -9809, 11005, 14297, 4857, -467, -131, -217,
    -1653, -2775, -2500, -1573, -2832, -4885, -2574, 1129, -1304, -6348, -7756, -11010,
    -16337, -9423, 7475, 9745, -4375, -7882, 3658, 8016, 5135, 12432, 20377, 9737,
    -5464, -2865, 7079, 5352, -1838, -2183, 1068, 2060, 795, -3644, -9579, -10115,
    -3720, 4914, 13169, 16429, -2216, -4694, 543, 8502, 11500, 5300, -4960, -5060,
    8144, 16653, 9691, 427, -2166, -5626, -8957, -3591, 3235, 2386, 2396, 7311,
    6782, 2747, 5620, 6484, -4766, -13193, -7333, -852, -1563, 137, 3242, -1432,
    -6988, -3861, 723, -26, -880, -149, -1562, -2305, 1746, 7740, 11320, 9819,
    2925, -2788, -1336, 1787, 874, 698, 3383, 4156, 4551, 6813, 3614, -5298,
    -7995, -5245, -7862, -9017, 1525, 9548, 1602, -8070, -6143, -1149, 370, 1674,
    25, -4882, -3426, 1787, -3535, -14372, -12867, -1764, 3406, 1159, -2176, -4683,
    -3753, -125, -1504, -5354, 302, 9551, 5734, -3748, -43, 8432, 2338, -8880,
    -4660, 7852, 9872, 6262, 10773, 15466, 7924, -29, 4811, 6177, -11403, -26200,
    -16264, -2578, -9503, -19373, -11526, -2474, -7148, -8350, 3964, 10726, 801, -11255,
    -12421, -6574, -3295, -5549, -6040, 203, 2101, -7117, -9391, 3917, 6976, -10201,
    -14071, 8523, 20606, 3700, -12255, -8735, -2294, -3406, -5376, -3916, 3635, 14009,
    8690, -15204, -25425, -6234, 10175, 798, -10908, -3572, 9072, 11314, 6977, 2598,
    53, 1100, 3802, 4315, 3440, 1876, -1870, -4046, -106, 5501, 6807, 4601,
    0, -6407, -8931, -4792, -978, -2066, -3216, -1413, -346, -2277, -4396, -2042,
    6200, 14060, 13585, 6089, -1914, -7676, -7969, -302, 6345, 2635, -2937, -386,
    2531, -1019, -4206, -4981, -6231, -793, 11296, 12110, -85, -3600, 4424, 6599,
    3888, 5024, -381, -14123, -15536, -4689, -5627, -16433, -14365, -1689, 4623, 3761,
    -1034, -9559, -11430, -2947, 1077, 99, 9124, 16522, 2313, -11879, -459, 11608,
    -1677, -15127, -4756, 9207, 8244, 3496, 3140, 2779, 2755, 2044, -3898, -7490,
    -697, 6067, 4931, 5334, 8027, 741, -11464, -10934, 17, 5456, 2827, -531,
    -1543, -191, 1361, -655, -2992, 1425, 9009, 9650, 2594, -4565, -5708, 388,
    7177, 4229, -7273, -13340, -7936, -1550, -4948, -14314, -15316, -2063, 10307, 5405,
    -6031, -3502, 6632, 7015, 4408, 10235, 12812, 4424, 938, 8710, 12337, 6680,
    685, -5358, -11474, -7484, 4861, 9858, 6961, 6579, 4402, -5058, -9362, -845,
    7813, 6443, -630, -6978, -8084, -3319, -1643, -6918, -6541, 3096, 4928, -4664,
    -7270, -221, 1164, -710, 6475, 13005, 4675, -7322, -6050, 4048, 8843, 4317,
    -1861, -103, 5764, 949, -10804, -6718, 10513, 10363, -9528, -18001, -7344, 605,
    -526, -2240, -6692, -11819, -4907, 6905, 4799, -2113, 3027, 5859, -5607, -8578,
    6654, 11420, -3646, -10123, -175, 4559, 3546, 10887, 15091, 4130, -2139, 7790,
    11037, -733, -3468, 5805, 1242, -14507, -11225, 7680, 9509, -5945, -9423, 1869,
    5883, 308, -1544, -2188, -8277, -9867, -2594, -2376, -13821, -17505, -6550, 730,
    -4153, -8260, -4053, 2975, 7426, 3730, -9706, -17382, -6422, 5509, -777, -8075,
    3863, 17528, 11612, -1462, -4553, -2013, 603, 3324, -1161, -12266, -11538, 5249,
    17269, 15010, 10028, 7305, 4334, 5555, 10116, 8463, 3741, 5944, 8986, 5302,
    3541, 6646, 4463, 84, 3522, 4011, -8949, -17829, -8535, 3611, 6599, 8848,
    10154, 513, -10870, -6882, 5728, 9129, 4163, 2514, 4028, 399, -6714, -6130,
    2586, 4627, -3247, -3128, 8707, 9280, -6582, -12549, -771, 5638, -136, -3065,
    -3223, -7283, -4457, 7923, 11112, 2963, 2596, 9327, 6934, 67, 2168, 8590,
    11540, 12261, 7849, -2129, -4609, 3596, 5329, -5429, -13763, -12255, -7391, -2555,
    1200, 675, -1657, -1266, -98, 1048, 4011, 3589, -2962, -5571, 119, 4994,
    7462, 11469, 8114, -5684, -11043, -1100, 4929, 1933, 5177, 11134, 4795, -3998,
    154, 6832, 3997, -955, -4539, -12597, -18114, -9853, 4843, 12191, 10804, 4891,
    -2216, -4694, 543, 8502, 11500, 5300, -4960, -5060, 8144, 16653, 9691, 427,
    -2166, -5626, -8957, -3591, 3235, 2386, 2396, 7311, 6782, 2747, 5620, 6484,
    -4766, -13193, -7333, -852, -1563, 137, 3242, -1432, -6988, -3861, 723, -26,
    4146, 1834, 258, -4714, -10927, -7030, 542, -4718, -13526, -6806, 4849, 1945,
    -7285, -8356, -7083, -8901, -6129, 1201, 2858, -2114, -5423, -2207, 5398, 8327,
    -167, -9100, -2771, 10352, 9732, -2631, -9779, -9317, -8870, -8101, -4634, -3082,
    -7044, -11523, -8477, 1409, 6518, 1134, -4008, -1432, 289, -2165, -917, -271,
    -8536, -11809, 1279, 11245, 4699, -494, 3567, 2432, -1123, 4897, 6935, -4829,
    -9447, 63, 1334, -6729, -4290, 2351, -1865, -4953, 655, -273, -5797, 984,
    9549, 3231, -2156, 7193, 13424, 5882, -1825, -4298, -4522, 5036, 21254, 21966,
    5084, -4625, 1499, 6989, 2120, -7235, -13389, -12369, -6556, -2918, -1613, 1454,
    1527, -4978, -7251, 573, 5087, -1714, -7502, -3890, 35, -2389, -5430, -5234,
    -4352, -1295, 6403, 9679, -1405, -15315, -12456, 524, 1813, -5239, -2119, 6286,
    5783, 3774, 7288, 4984, -1723, 2208, 6711, -4995, -14160, -3191, 4670, -4283,
    -5114, 7107, 5093, -8990, -8191, 2805, 4878, 4143, 5723, -307, -5658, 3407,
    9090, -4199, -14394, -6335, 324, -5090, -9208, -8027, -6983, -4137, -3147, -10358,
    -12720, 1065, 13655, 10042, 1782, -2345, -6159, -3817, 7924, 12787, 5104, 1825,
    5891, 3035, -4424, -5023, -2613, -1660, 1115, -373, -8431, -5629, 9592, 10246,
    -5517, -6451, 9057, 11404, 684, 49, 6213, 4982, 3089, 5943, 6340, 7366,
    11178, 3003, -12331, -5026, 17676, 15024, -7051, -6707, 7896, -910, -18369, -9658,
    7320, 3217, -4296, 3929, 9447, 2981, 2313, 6486, -2675, -16240, -12305, 2451,
    8713, 7202, 7508, 10598, 15382, 20311, 18077, 5247, -8946, -12950, -5900, 2384,
    2383, -3281, -4306, 406, 3275, 2597, -610, -9967, -20286, -16190, 1109, 11881,
    10310, 8743, 10403, 7635, 1046, -1989, 501, 3509, -1275, -14059, -18191, -3150,
    11797, 7076, -2845, 1426, 9065, 5334, 66, 4078, 7921, 1069, -9830, -11110,
    -2054, 2175, -4592, -4302, 11297, 16754, 775, -4073, 16954, 28132, 11602, -3283,
    -3587, -7509, -12508, -4632, 1124, -7033, -8743, 2225, 3141, -5797, -1847, 9359,
    6301, -3260, -267, 9118, 8804, -492, -6524, -2507, 4832, 3655, -4760, -9750,
    -11026, -11789, -6445, 316, -6887, -18454, -10854, 5015, 3996, -3312, 1419, 5558,
    1536, 4803, 10472, -406, -12869, -5500, 2635, -6485, -11356, 722, 8142, 2151,
    -1598, -744, -3595, -4629, 1077, 4492, 1245, -2996, -5845, -6281, -1209, 5929,
    9044, 9814, 10486, 7873, 2184, -2354, -4622, -4310, -1921, -2474, -5484, -1019,
    10703, 15104, 7685, -649, -3546, -3325, -2710, -4846, -8609, -5848, 2065, 2454,
    -2872, -384, 4560, -1834, -9979, -4674, 4856, 4819, 111, -1827, -2271, -1272,
    743, -431, -2836, -1621, 26, 683, 4881, 6972, -1085, -7885, -2054, 3973,
    975, 1192, 7614, 7801, 4599, 6705, 2676, -11207, -11145, 7911, 14858, -237,
    -7170, 8356, 23804, 22674, 13786, 7860, 5355, 3592, 1215, -250, 1263, 2697,
    837, -360, 1677, 2323, 1041, 2557, 4467, 2171, -530, -2344, -8342, -12128,
    -2641, 8962, 5506, -2468, 628, 2670, -5256, -3340, 13198, 15318, -3511, -11508,
    680, 7297, 1946, 1979, 6356, 3363, -1131, -811, -839, 2127, 10220, 6452,
    -9903, -9075, 10268, 11613, -5570, -4836, 9780, 6051, -6168, -3722, -2993, -12393,
    -4296, 16652, 9402, -17329, -16609, 4896, 6352, -6774, -7816, -5239, -10426, -8511,
    2878, 5993, 1558, 1599, 141, -8168, -11539, -6948, -5783, -8429, -7576, -6328,
    -7588, -6068, -2532, -1464, 1138, 4924, -186, -9888, -7578, 2271, 2085, -1854,
    5741, 12767, 3397, -5743, 4186, 17590, 14693, 4703, 951, -1145, -4027, -1698,
    1305, -2326, -4123, 2271, 5200, -537, -2561, 2437, 4146, 1834, 258, -4714,
    -10927, -7030, 542, -4718, -13526, -6806, 4849, 1945, -7285, -8356, -7083, -8901,
    -6129, 1201, 2858, -2114, -5423, -2207, 5398, 8327, -167, -9100, -2771, 10352,
    9732, -2631, -9779, -9317, -8870, -8101, -4634, -3082, -18364, -6880, 4190, -1387,
    -9381, -2509, 6503, 5045, 3461, 2791, -7514, -13418, 1579, 14462, 3476, -7624,
    1661, 10909, 6063, 1978, 3015, -634, -4893, -3219, -335, 4777, 13228, 11157,
    -2970, -7475, 111, -2040, -14315, -17747, -10852, -2061, 6163, 6478, -1085, 2040,
    13250, 3634, -19066, -15733, 6439, 9063, -1401, 268, 460, -11710, -11415, 5732,
    11588, 4597, 4764, 6347, -912, -4009, -270, -4408, -10656, -4575, 2219, -3157,
    -8659, -5528, -1647, 369, 879, -6085, -14352, -8950, 3737, 7141, 5830, 9950,
    13104, 11253, 11121, 10037, 1333, -6355, -4040, 921, 1025, -1525, -5882, -11664,
    -13947, -12792, -11736, -5401, 9002, 17188, 8407, -5164, -7991, -1857, 3115, 2075,
    -1698, 352, 9522, 13206, 4592, -4233, -4494, -3358, -2108, 6530, 13045, 1829,
    -13893, -9786, 5973, 8502, -822, -5150, -3974, -3893, -2208, 2327, 6923, 13119,
    14119, -4907, -30309, -25487, 4624, 13019, -7431, -13129, 7103, 16747, 5085, -898,
    4842, 4613, 199, 4419, 10228, 7174, 2894, 4040, 2776, -4415, -7855, -1716,
    5812, 4841, -1139, -904, 4317, 1577, -8480, -9535, 1074, 7378, 2297, -5875,
    -10787, -10523, -4056, 2815, 4402, 5904, 8375, 1179, -12282, -12858, -2092, 75,
    -4673, -676, 5257, -135, -6412, -2549, 1406, 310, 2953, 5646, -1160, -5814,
    3374, 10517, 3423, -1344, 4295, 3147, -4755, 1073, 11262, -1142, -19546, -9285,
    10624, 1434, -18369, -11517, 4958, 1197, -5437, 5208, 14811, 11521, 9310, 8580,
    1904, 2793, 14071, 11592, -4023, -4638, 5059, 1205, -2531, 11288, 17778, 2631,
    -4393, 7565, 11665, 3930, 3673, 4524, -5382, -8577, 3886, 8667, -3710, -11724,
    -5026, 2144, -334, -6378, -4738, 7038, 15299, 7816, -3464, -1674, 5292, 4243,
    2720, 7815, 9222, 2509, -2621, -3643, -5490, -5280, -503, 506, -6875, -12841,
    -8065, 1449, 3394, -1778, -2643, 1903, 1997, -1071, 209, -2814, -15870, -17686,
    2317, 15378, 4567, -4481, 2162, 3464, -5557, -5676, 1294, -457, -4374, 930,
    6985, 5617, 113, -8677, -17640, -17178, -9888, -7768, -9674, -9308, -9603, -8837,
    -880, 5508, 831, -4604, -2971, -3243, -6929, -6121, -4467, -6021, -3658, -342,
    -5614, -8331, 2696, 10283, 3540, 1301, 9278, 7447, -4258, -5413, 2437, 4536,
    4735, 9452, 9919, 3941, 2345, 5227, 1993, -5866, -5860, 3691, 8882, 1025,
    -7933, -3760, 5476, 4787, -1513, -4066, -6325, -7144, 1498, 10074, 4910, -2342,
    615, 714, -7887, -8982, -1643, -2016, -7953, -7951, -5642, -4325, -444, -12,
    -4792, -1782, 5188, -2487, -14150, -6440, 9043, 12199, 11419, 12629, 6659, 1604,
    7209, 7064, -2670, -329, 7478, -3416, -14433, -325, 13607, 6149, 2282, 10103,
    4457, -9309, -5113, 8273, 12607, 13113, 8320, -7075, -12170, 970, 2322, -12013,
    -9166, 4863, -3011, -16213, -3509, 11244, 595, -10039, 453, 9284, 2061, -3343,
    3966, 13304, 12048, -1227, -12612, -7866, 3115, 3373, 1778, 10813, 16099, 6612,
    -855, 4470, 9399, 4884, -2716, -5372, 295, 6905, 880, -10686, -6123, 8202,
    8797, 3015, 8612, 11091, -1855, -8475, 335, 2414, -5031, -3495, 545, -7618,
    -13528, -5824, -2100, -8218, -6135, 3838, 4405, 52, 4938, 10624, 4470, -4620,
    -4402, 789, 1559, -2752, -5644, -1081, 7498, 8136, -1775, -7990, -1209, 6160,
    73, -10017, -6092, 5505, 1897, -15853, -21045, -6174, 4873, -949, -7112, -1034,
    7849, 10704, 10058, 6352, -1416, -5983, -2295, 1434, -2075, -6046, -2836, 2208,
    1396, -916, 3822, 12157, 12240, 2347, -5365, -2189, 5400, 6780, 2858, 2486,
    6862, 7984, 2540, -3641, -5972, -5111, -1855, 1458, -5, -4212, -2738, 4100,
    7392, 4005, -4221, -15004, -18364, -6880, 4190, -1387, -9381, -2509, 6503, 5045,
    3461, 2791, -7514, -13418, 1579, 14462, 3476, -7624, 1661, 10909, 6063, 1978,
    3015, -634, -4893, -3219, -335, 4777, 13228, 11157, -2970, -7475, 111, -2040,
    -14315, -17747, -10852, -2061, -836, 5794, 1501, -12729, -16597, -2623, 6180, 148,
    1170, 13759, 14583, 2745, -161, 3763, -481, -3891, 4631, 10283, 1496, -6864,
    -802, 11266, 13857, 3835, -7554, -9069, -5525, -8067, -12351, -8249, -1071, 1311,
    3666, 6643, 2227, -5341, -6163, -6583, -12338, -10459, 3452, 11160, 5248, 213,
    1543, 360, -3339, -3253, -1902, -2012, 1071, 8202, 13710, 13063, 3543, -10017,
    -9842, 9848, 22003, 5530, -14180, -6463, 10565, 6772, -3582, 3845, 11990, -182,
    -11850, -2300, 8597, 3738, 439, 8267, 10299, 3267, 2376, 5479, 1153, -3046,
    764, 2902, 962, 4922, 11062, 9998, 8407, 10098, 5790, 1140, 10034, 17989,
    5706, -7847, -179, 11336, 8283, 5006, 8324, 493, -16275, -16150, 2164, 14158,
    10358, -28, -9598, -11952, -2421, 9349, 9715, 1772, -3461, -3993, -775, 6423,
    10056, 3741, -2392, 431, -368, -13156, -19120, -6407, 2278, -9829, -20258, -8744,
    6467, 5416, -753, 352, -55, -6756, -9622, -4835, 3083, 13761, 21571, 12882,
    -7944, -15995, -3597, 8456, 7536, 6778, 15101, 17757, 3591, -10436, -5154, 7501,
    6001, -2794, -1439, 2901, -1874, -5610, -2811, -8515, -19873, -11879, 10121, 12075,
    -6163, -10611, 5089, 14175, 6983, 995, 6537, 12359, 5215, -8793, -11607, -3013,
    -1485, -7633, -2732, 8902, 4467, -9486, -8706, 111, -3070, -9987, -7017, -3566,
    -5517, -4156, -3520, -11406, -12100, 5131, 16295, 3093, -13477, -12372, -4297, -2635,
    -3126, -3919, -9484, -12280, -2192, 10366, 8931, -504, -1327, 5286, 7755, 5636,
    3706, 1972, 3861, 11557, 12417, -671, -8299, 2743, 13234, 9531, 6323, 8584,
    3221, -3683, 2073, 7346, -214, -3681, 3033, 323, -10495, -9131, -1646, -1989,
    1764, 12531, 8436, -7649, -8586, 2431, 4773, 4813, 10115, 5491, -6705, -3618,
    6787, -1248, -15923, -9309, 9844, 14694, 2394, -11172, -12125, 2064, 16449, 13885,
    624, -6636, -8706, -11034, -5240, 9386, 14261, 3790, -487, 13505, 25587, 16559,
    620, -504, 4056, -4048, -11991, -1218, 10263, 1330, -9319, -3629, -1318, -13177,
    -15850, -3357, 1126, -4414, -2542, 2674, 669, 601, 6163, 6248, 4224, 10150,
    13147, 3594, -4205, -1508, -366, -4956, -5143, 669, 4309, 1011, -8038, -14799,
    -11262, -4335, -5120, -6530, 2169, 12760, 14350, 9630, 2074, -6035, -5710, 3730,
    8845, 5293, 17, -6893, -12803, -6161, 6441, 3257, -11151, -12614, -1516, 4231,
    2871, 1469, 185, -219, -6, -4070, -7590, -2658, -674, -11356, -15836, -912,
    11565, 3825, -9078, -10393, -3264, 2590, -785, -12208, -14818, -863, 10078, 4904,
    -1334, 1644, 5472, 9054, 15929, 15583, 2900, -7296, -6418, -2230, 922, 2840,
    67, -3995, -2839, -1203, -1685, 4521, 14387, 13096, 4495, 3029, 4281, -344,
    -3251, -588, 35, 825, 8380, 14731, 12425, 8821, 8984, 8434, 5046, -494,
    -5661, -3071, 5303, 4912, -2579, 72, 7136, -630, -12486, -7178, 4012, 2743,
    -1790, 233, 527, -1267, 3341, 8087, 4908, 2276, 3982, -1539, -14834, -19169,
    -8884, 423, -4444, -14460, -11446, 2615, 8100, 2685, 2854, 7462, 1793, -6183,
    -1474, 3404, -4646, -11157, -8306, -10032, -14827, -8462, -903, -6424, -10924, -3563,
    18, -5139, -3210, 4325, 650, -10561, -12216, -3043, 5405, 4803, -4776, -13451,
    -11176, -2521, 787, -3276, -8334, -7120, 2062, 6808, -3907, -13723, -3807, 7658,
    -751, -9686, -1299, 2347, -10145, -13342, -844, 3156, -2711, -1192, 1457, -3487,
    -1608, 7967, 3950, -9430, -7642, 3401, 2608, -1133, 7257, 13716, 5965, -168,
    4807, 5090, -5316, -8990, 95, 5160, -361, -2655, 2171, 675, -9659, -16627,
    -17455, -15823, -5373, 12847, 18415, 5649, -2469, 3881, 6038, -4123, -12015, -9235,
    -836, 5794, 1501, -12729, -16597, -2623, 6180, 148, 1170, 13759, 14583, 2745,
    -161, 3763, -481, -3891, 4631, 10283, 1496, -6864, -802, 11266, 13857, 3835,
    -7554, -9069, -5525, -8067, -12351, -8249, -1071, 1311, 3666, 6643, 2227, -5341,
    -520, 7089, 2903, -3078, 4507, 16250, 14162, 1513, -7801, -8940, -2128, 7282,
    5416, -9435, -17105, -7489, 4112, 8224, 12793, 16615, 9258, -3604, -8124, -5174,
    -2241, -1358, -5086, -11866, -10841, -1908, 650, -2271, 3237, 10766, 5623, -2472,
    -880, 459, -2710, 743, 3908, -5761, -8807, 9693, 19058, 248, -10983, 6735,
    18953, 5985, -3267, 4464, 5103, -7830, -12301, -1778, 8505, 10421, 7849, 5157,
    4957, 7256, 8771, 7585, 3905, -2068, -7104, -5831, 1231, 6562, 3674, -4927,
    -7427, 2335, 10839, 3299, -9686, -9182, 553, 4552, 2410, 453, 1579, 8894,
    16391, 9924, -4389, -5785, 1312, 105, 703, 13652, 19086, 9450, 7971, 15264,
    8382, -3191, 2347, 7935, -3220, -9093, -271, 1957, 616, 13713, 21283, 3576,
    -9302, 4280, 13485, -448, -10591, -3307, 1567, -3061, -3843, 1858, 5627, 5035,
    3429, 3694, 3866, -1057, -6224, -996, 7591, 4470, -2072, 3390, 10486, 5463,
    -1137, -693, -2885, -8218, -5201, 2985, 5029, 2530, 277, -3505, -7548, -8662,
    -7411, -2122, 5674, 4831, -3921, -2527, 8982, 9977, 1772, 3966, 11369, 5213,
    -7478, -8685, -1196, 2346, -1362, -8272, -11284, -7810, -6163, -9262, -6504, 1263,
    -153, -5813, -120, 7762, 3641, -328, 4653, 3374, -6314, -6298, 2679, 4985,
    1928, 85, -3268, -3180, 5369, 7835, -2397, -6720, -649, -976, -4111, 2633,
    4203, -7964, -7606, 11420, 16247, 545, -7233, -4298, -5500, -433, 14558, 12624,
    -7633, -11932, 1825, 4397, -897, 7026, 16425, 11561, 5723, 4244, -5454, -12695,
    1067, 16886, 10858, -1821, -4644, -9202, -15816, -7897, 5216, 3927, 1109, 10449,
    11508, -4448, -9661, 4412, 10184, -830, -8430, -6801, -4114, 1443, 8339, 6072,
    -1052, -1589, -1962, -7374, -3795, 11130, 17291, 8782, -596, -7164, -13564, -13117,
    -7016, -6790, -7622, 1951, 9793, 1159, -10609, -10309, -6997, -8966, -8082, -1310,
    5042, 11178, 16918, 11272, -8791, -24046, -15742, 7042, 17991, 9675, 1862, 7051,
    12562, 10716, 12048, 14245, 3351, -8481, -1638, 5331, -9421, -21165, -5794, 11514,
    7044, -3139, -6770, -10095, -6163, 7194, 6038, -11056, -11021, 5154, 2391, -12977,
    -9474, -1980, -16005, -26242, -10092, 2988, -5956, -11365, -4168, -4971, -10245, -2646,
    2665, -11128, -20756, -5011, 15416, 16714, 5967, -2513, -5784, -3992, -1758, -6718,
    -11620, -2437, 11343, 8609, -4272, -4325, 6190, 6562, -4097, -8862, -3570, 348,
    -3738, -10730, -13110, -9200, -2196, 5505, 11028, 7739, -3278, -6233, 5037, 12380,
    6876, 7308, 19273, 18856, 1458, -5117, 6636, 13326, 6741, -1218, -8039, -13550,
    -9300, 134, 420, -4583, -5577, -8830, -12521, -1705, 13817, 9406, -5079, -3050,
    8590, 9315, 4021, 3325, 2311, -1274, -2523, -2797, -3430, -1891, -2081, -5909,
    -5004, 496, 801, -534, 3628, 4860, 699, 2036, 3367, -5605, -7929, 5662,
    8448, -5890, -5533, 8900, 3981, -11060, -4654, 7068, -289, -5566, 4023, 3372,
    -8139, -3493, 8865, 3849, -5881, -2978, -2163, -9779, -7487, 6447, 15611, 16845,
    13207, 2541, -7601, -6776, -1539, -1948, -6726, -12650, -13676, -2211, 8408, -1605,
    -14787, -2998, 14531, 7022, -6384, 383, 5711, -9830, -19202, -3228, 11706, 3802,
    -9320, -6169, 6603, 9690, -583, -7864, 305, 11905, 8228, -6083, -11488, -3078,
    7071, 8277, 610, -7784, -10045, -7719, -4100, 1512, 5137, 172, -6800, -5285,
    -2309, -7403, -11172, -5901, -2414, -5381, -4273, 873, 279, -1645, 3408, 7641,
    3622, -1268, -1956, -2196, -943, 4526, 8259, 4896, -2023, -7161, -7036, -1085,
    3294, -876, -7249, -7919, -7392, -8942, -6766, -2578, -4473, -7253, -1732, 4519,
    1963, -1912, 1017, 5067, 4202, -434, -6455, -8164, -520, 7089, 2903, -3078,
    4507, 16250, 14162, 1513, -7801, -8940, -2128, 7282, 5416, -9435, -17105, -7489,
    4112, 8224, 12793, 16615, 9258, -3604, -8124, -5174, -2241, -1358, -5086, -11866,
    -10841, -1908, 650, -2271, 3237, 10766, 5623, -2472, 2612, 981, 3748, -2928,
    -13261, -9093, -603, -6001, -14202, -10842, -6243, -8455, -7128, 1038, 5010, 389,
    -6580, -10513, -9510, -4509, 446, 2525, 1522, -2451, -6285, -4477, 2068, 5776,
    2909, -2517, -3837, 928, 4338, -981, -7393, -3424, 3522, -158, -7784, -5506,
    2863, 7838, 10401, 9239, -2916, -19116, -20013, -3775, 7626, 859, -7058, 3931,
    20492, 16931, 2793, 4567, 12244, 791, -16306, -15779, -10257, -10992, -1533, 13250,
    6827, -6766, 3852, 19317, 10673, 268, 8140, 10878, 2134, 6119, 15772, 6783,
    -6036, -2165, 2720, -2144, -3601, -2025, -3970, 1455, 10886, 3943, -7678, -411,
    6596, -6374, -12035, 3308, 7246, -7734, -9998, 1577, 1540, -5540, -4282, -3674,
    -7515, -3202, 4896, 4103, 1835, 4184, 1373, -3844, 950, 7313, 2875, -1959,
    1564, 3418, 520, 1398, 3182, -2147, -9007, -8976, -4227, -800, -2738, -8860,
    -8525, 4779, 17815, 15205, 3404, -1189, 4390, 10655, 9412, 1530, -4859, -5375,
    -3806, -1374, 4485, 7869, 1271, -7767, -8495, -4960, -3546, -1188, 1299, -2161,
    -6194, -694, 8540, 8580, 1284, -2233, -798, -1888, -5798, -4474, 2366, 4470,
    938, 3291, 10570, 9234, 2641, 3881, 3524, -11087, -21307, -9372, 4984, 3229,
    1018, 9041, 10695, 260, -4797, 2608, 11141, 11815, 4885, -2197, -284, 6801,
    7346, 5214, 10809, 15790, 9149, 518, 519, 3898, 5385, 4314, -1652, -5666,
    2405, 11529, 6759, -990, -1671, -8048, -17746, -8428, 9922, 5920, -10650, -8479,
    4492, 4471, -1765, -1867, -2858, -5960, -3199, -142, -2856, -1674, 5503, 5815,
    -822, -1946, 1076, -1984, -8313, -7163, 2424, 9590, 5025, -4524, -3819, 5316,
    7021, 1595, 2174, 6633, 5980, 4658, 5069, 194, -3828, 3966, 11081, 3795,
    -3708, -1140, -4207, -15118, -11916, 5011, 9929, -968, -8520, -7750, -7392, -8896,
    -9385, -7652, -1455, 5698, 4634, -2236, -2546, 4347, 8551, 6586, -661, -12155,
    -17629, -6845, 7604, 4676, -9081, -9179, 5234, 12311, 5735, -567, -2181, -6715,
    -10160, -2542, 7279, 4211, -3066, 2886, 13927, 9890, -5303, -11036, -2235, 8746,
    12326, 9415, 6032, 5617, 4852, 456, -3061, -1236, 2347, 4718, 8125, 10960,
    9645, 8468, 10808, 9328, 1172, -2698, 2250, 4693, -440, -2730, 2587, 6000,
    2250, -1749, -1305, 344, 2151, 5569, 5646, -1747, -7453, -2610, 2837, -2854,
    -9797, -4178, 6916, 10859, 9072, 5223, -639, 320, 13769, 21724, 7310, -12467,
    -12734, -1636, -1801, -9575, -6452, 1919, -5995, -22464, -14058, 18142, 29507, 5937,
    -10888, -492, 5454, -4315, -1289, 12198, 4220, -14810, -11824, 711, -2452, -5471,
    5860, 11225, 3077, -2690, -7098, -14698, -10358, 2216, -2614, -15178, -7175, 4742,
    -5038, -13069, 737, 9635, 2104, 3963, 13968, 5673, -10807, -8434, 4637, 11403,
    16824, 19620, 8910, -3940, -1826, 4909, 1184, -5950, -6180, -1047, 4338, 3045,
    -7170, -12320, -2159, 7936, 3962, -1976, 1181, 4728, 3142, 1087, -2580, -8213,
    -7622, -2867, -6401, -13879, -8894, 6676, 16823, 16243, 9685, 1412, -3519, -1965,
    2471, 5856, 6516, 883, -8993, -11843, -5126, -571, -2487, -2837, -706, -2020,
    -3532, 695, 5762, 4667, -1127, -6757, -8117, -2920, 4065, 5024, 396, -4413,
    -7357, -6108, -431, -77, -9146, -11841, 99, 8128, 2667, 2273, 11322, 6589,
    -12321, -15167, 1114, 5733, -7708, -13946, -6623, -3430, -6287, -1565, 7248, 3737,
    -10085, -14694, -4153, 5350, 2144, -4448, -3784, -1497, -4384, -7072, -5374, -2209,
    3780, 12482, 12439, 711, -6095, -848, 2921, -255, -3391, -8362, -15414, -11538,
    588, -549, -11796, -9668, 1254, 1552, -315, 7304, 9761, 2616, 4101, 10205,
    626, -12722, -7440, 3534, 2612, 981, 3748, -2928, -13261, -9093, -603, -6001,
    -14202, -10842, -6243, -8455, -7128, 1038, 5010, 389, -6580, -10513, -9510, -4509,
    446, 2525, 1522, -2451, -6285, -4477, 2068, 5776, 2909, -2517, -3837, 928,
    4338, -981, -7393, -3424,
];
