//! Impulse tap tables for the cabinet models.
//!
//! Each tap is a `(base, sag)` pair: the summed contribution of a delayed
//! sample is `delayed * (base + sag * envelope)`, where the envelope term is
//! the sag follower level for the speaker cabinets and `delayed.abs()` for
//! the amp cabinet.

// Based on MIT-licensed code (c) 2016 by Chris Johnson (airwindows.com)

/// Taps of the high-power stack model.
pub const HIGH_POWER_STACK: [(f64, f64); 83] = [
    (1.29550481610475132, 0.19713872057074355),
    (1.42302569895462616, 0.30599505521284787),
    (1.28728195804197565, 0.23168333460446133),
    (0.88553784290822690, 0.14263256172918892),
    (0.37129054918432319, 0.00150040944205920),
    (-0.12150959412556320, -0.32776273620569107),
    (-0.44900065463203775, -0.74101214925298819),
    (-0.54058781908186482, -1.07821707459008387),
    (-0.49361966401791391, -1.23540109014850508),
    (-0.39819495093078133, -1.11247213730917749),
    (-0.31379279985435521, -0.80330360359638298),
    (-0.30744359242808555, -0.42132528876858205),
    (-0.33943170284673974, -0.09183418349389982),
    (-0.33838775119286391, 0.06453051658561271),
    (-0.30682305697961665, 0.09549380253249232),
    (-0.23408741339295336, 0.08083404732361277),
    (-0.10411746814025019, -0.00253651281245780),
    (0.00133623776084696, -0.04447267870865820),
    (0.02461903992114161, 0.07530671732655550),
    (0.02086715842475373, 0.22795860236804899),
    (0.02761433637100917, 0.26108320417844094),
    (0.04475285369162533, 0.19160705011061663),
    (0.09447338372862381, 0.03681550508743799),
    (0.13445890343722280, -0.13713036462146147),
    (0.13872868945088121, -0.22401242373298191),
    (0.14915650097434549, -0.26718804981526367),
    (0.12766643217091783, -0.27745664795660430),
    (0.03675849788393101, -0.18338278173550679),
    (-0.06307306864232835, -0.06089480869040766),
    (-0.14947389348962944, -0.04642103054798480),
    (-0.25235266566401526, -0.08423062596460507),
    (-0.33496344048679683, -0.09808328256677995),
    (-0.36590030482175445, -0.10622650888958179),
    (-0.35015197011464372, -0.08982043516016047),
    (-0.26808437585665090, -0.00735561860229533),
    (-0.11624318543291220, 0.07142484314510467),
    (0.05617084165377551, 0.11785854050350089),
    (0.20540028692589385, 0.20479174663329586),
    (0.30455415003043818, 0.29074864580096849),
    (0.33810750937829476, 0.29182307921316802),
    (0.31936133365277430, 0.26535537727394987),
    (0.27388548321981876, 0.19735049990538350),
    (0.21454597517994098, 0.06415909270247236),
    (0.15001045817707717, -0.03831118543404573),
    (0.07283437284653138, -0.09281952429543777),
    (-0.03917872184241358, -0.14306291461398810),
    (-0.16695932032148642, -0.19138995946950504),
    (-0.27055854466909462, -0.22531296466343192),
    (-0.33256357307578271, -0.23305840475692102),
    (-0.33459770116834442, -0.24091822618917569),
    (-0.27156687236338090, -0.24062938573512443),
    (-0.17197093288412094, -0.19083085091993421),
    (-0.06738628195910543, -0.10268609751019808),
    (0.00222429218204290, 0.01439664435720548),
    (0.01346992803494091, 0.15947137113534526),
    (-0.02038911881377448, 0.26763170752416160),
    (-0.08233579178189687, 0.29415931086406055),
    (-0.15447855089824883, 0.26489186990840807),
    (-0.20518281113362655, 0.16135382257522859),
    (-0.22244686050232007, -0.00847180390247432),
    (-0.21849243134998034, -0.14460595245753741),
    (-0.20256105734574054, -0.18932793221831667),
    (-0.18604070054295399, -0.17250665610927965),
    (-0.17222844322058231, -0.12992472027850357),
    (-0.14447856616566443, -0.09089219002147308),
    (-0.10385520794251019, -0.08600465834570559),
    (-0.07124435678265063, -0.09071532210549428),
    (-0.05216857461197572, -0.06794061706070262),
    (-0.05235381920184123, -0.02818101717909346),
    (-0.07569701245553526, 0.00634228544764946),
    (-0.10320125382718826, 0.02751486906644141),
    (-0.12122120969079088, 0.05434007312178933),
    (-0.13438969117200902, 0.09135218559713874),
    (-0.13534390437529981, 0.10437672041458675),
    (-0.11424128854188388, 0.08693450726462598),
    (-0.08166894518596159, 0.06949989431475120),
    (-0.04293976378555305, 0.05718625137421843),
    (0.00933076320644409, 0.01728285211520138),
    (0.06450430362918153, -0.02492994833691022),
    (0.10187400687649277, -0.03578455940532403),
    (0.11039763294094571, -0.03995523517573508),
    (0.08557960776024547, -0.03482514309492527),
    (0.02730881850805332, -0.00514750108411127),
];

/// Taps of the vintage stack model.
pub const VINTAGE_STACK: [(f64, f64); 84] = [
    (1.31698250313308396, -0.08140616497621633),
    (1.47229016949915326, -0.27680278993637253),
    (1.30410109086044956, -0.35629113432046489),
    (0.81766210474551260, -0.26808782337659753),
    (0.19868872545506663, -0.11105517193919669),
    (-0.39115909132567039, 0.12630622002682679),
    (-0.76881891559343574, 0.40879849500403143),
    (-0.87146861782680340, 0.59529560488000599),
    (-0.79504575932563670, 0.60877047551611796),
    (-0.61653017622406314, 0.47662851438557335),
    (-0.40718195794382067, 0.24955839378539713),
    (-0.31794900040616203, 0.04169792259600613),
    (-0.41075032540217843, -0.00368483996076280),
    (-0.56901352922170667, 0.11027360805893105),
    (-0.62443222391889264, 0.22198075154245228),
    (-0.53462856723129204, 0.22933544545324852),
    (-0.34441703361995046, 0.12956809502269492),
    (-0.13947052337867882, -0.00339775055962799),
    (0.03771252648928484, -0.10863931549251718),
    (0.18280210770271693, -0.17413646599296417),
    (0.24621986701761467, -0.14547053270435095),
    (0.22347075142737360, -0.02493869490104031),
    (0.14346348482123716, 0.11284054747963246),
    (0.00834364862916028, 0.24284684053733926),
    (-0.11559740296078347, 0.32623054435304538),
    (-0.18067604561283060, 0.32311481551122478),
    (-0.22927997789035612, 0.26991539052832925),
    (-0.28487666578669446, 0.22437227250279349),
    (-0.31992973037153838, 0.15289876100963865),
    (-0.35174606303520733, 0.05656293023086628),
    (-0.36894898011375254, -0.04333925421463558),
    (-0.32567576055307507, -0.14594589410921388),
    (-0.27440135050585784, -0.15529667398122521),
    (-0.21998973785078091, -0.05083553737157104),
    (-0.10323624876862457, 0.04651829594199963),
    (0.02091603687851074, 0.12000046818439322),
    (0.11344930914138468, 0.17697142512225839),
    (0.22766779627643968, 0.13645102964003858),
    (0.38378309953638229, -0.01997653307333791),
    (0.52789400804568076, -0.21409137428422448),
    (0.55444630296938280, -0.32331980931576626),
    (0.42333237669264601, -0.26855847463044280),
    (0.21942831522035078, -0.12051365248820624),
    (-0.00584169427830633, 0.03706970171280329),
    (-0.24279799124660351, 0.17296440491477982),
    (-0.40173760787507085, 0.21717989835163351),
    (-0.43930035724188155, 0.16425928481378199),
    (-0.41067765934041811, 0.10390115786636855),
    (-0.34409235547165967, 0.07268159377411920),
    (-0.26542883122568151, 0.05483457497365785),
    (-0.22024754776138800, 0.06484897950087598),
    (-0.20394367993632415, 0.08746309731952180),
    (-0.17565242431124092, 0.07611309538078760),
    (-0.10116623231246825, 0.00642818706295112),
    (-0.00782648272053632, -0.08004141267685004),
    (0.05059046006747323, -0.12436676387548490),
    (0.06241531553254467, -0.11530779547021434),
    (0.04952694587101836, -0.08340945324333944),
    (0.00843873294401687, -0.03279659052562903),
    (-0.05161338949440241, 0.03428181149163798),
    (-0.08165520146902012, 0.08196746092283110),
    (-0.06639532849935320, 0.09797462781896329),
    (-0.02953430910661621, 0.09175612938515763),
    (0.00741058547442938, 0.05442091048731967),
    (0.01832866125391727, 0.00306243693643687),
    (0.00526964230373573, -0.04364102661136410),
    (-0.00300984373848200, -0.09742737841278880),
    (-0.00413616769576694, -0.14380661694523073),
    (-0.00588769034931419, -0.16012843578892538),
    (-0.00688588239450581, -0.14074464279305798),
    (-0.02277307992926315, -0.07914752191801366),
    (-0.04627166091180877, 0.00192787268067208),
    (-0.05562045897455786, 0.05932868727665747),
    (-0.05134243784922165, 0.08245334798868090),
    (-0.04719409472239919, 0.07498680629253825),
    (-0.05889738914266415, 0.06116127018043697),
    (-0.09428363535111127, 0.06535868867863834),
    (-0.15181756953225126, 0.08982979655234427),
    (-0.20878969456036670, 0.10761070891499538),
    (-0.22647885581813790, 0.08462542510349125),
    (-0.19723482443646323, 0.02665160920736287),
    (-0.16441643451155163, -0.02314691954338197),
    (-0.15201914054931515, -0.04424903493886839),
    (-0.15454370641307855, -0.04223203797913008),
];

/// Taps of the boutique stack model.
pub const BOUTIQUE_STACK: [(f64, f64); 85] = [
    (1.30406584776167445, -0.01410622186823351),
    (1.09350974154373559, 0.34478044709202327),
    (0.52285510059938256, 0.84225842837363574),
    (-0.00018126260714707, 1.02446537989058117),
    (-0.34943699771860115, 0.84094709567790016),
    (-0.53068048407937285, 0.49231169327705593),
    (-0.48631669406792399, 0.08965111766223610),
    (-0.28099201947014130, -0.23921137841068607),
    (-0.10333290012666248, -0.35058962687321482),
    (-0.06605032198166226, -0.23447405567823365),
    (-0.10485808661261729, -0.05025985449763527),
    (-0.13231190973014911, 0.05484648240248013),
    (-0.12926184767180304, 0.04054223744746116),
    (-0.13802696739839460, -0.01876754906568237),
    (-0.16548980700926913, -0.06772130758771169),
    (-0.14469310965751475, -0.10590928840978781),
    (-0.07838457396093310, -0.13120101199677947),
    (-0.05123031606187391, -0.13883400806512292),
    (-0.08906103481939850, -0.07840461228402337),
    (-0.13939265522625241, -0.01194366471800457),
    (-0.14957600717294034, -0.07687598594361914),
    (-0.14112708654047090, -0.20118461131186977),
    (-0.14961020766492997, -0.30005716443826147),
    (-0.16130382224652270, -0.40459872030013055),
    (-0.15679868471080052, -0.47292767226083465),
    (-0.16456530552807727, -0.45182121471666481),
    (-0.16852385701909278, -0.38272684270752266),
    (-0.13317562760966850, -0.28829580273670768),
    (-0.09396196532150952, -0.18886898332071317),
    (-0.10133496956734221, -0.11158788414137354),
    (-0.16097596389376778, -0.02621299102374547),
    (-0.21419006394821866, 0.03585678078834797),
    (-0.21273234570555244, 0.02574469802924526),
    (-0.16934948798707830, -0.01354331184333835),
    (-0.11970436472852493, -0.04242183865883427),
    (-0.09329023656747724, -0.06890873292358397),
    (-0.10255328436608116, -0.11482972519137427),
    (-0.13883223352796811, -0.18016014431438840),
    (-0.16532844286979087, -0.24521957638633446),
    (-0.16254607738965438, -0.25669472097572482),
    (-0.15353207135544752, -0.15048064682912729),
    (-0.13039046390746015, 0.00200335414623601),
    (-0.06707245032180627, 0.06498125592578702),
    (0.01427326441869788, 0.01940451360783622),
    (0.06151238306578224, -0.07335755969763329),
    (0.04685840498892526, -0.14258849371688248),
    (-0.00950136304466093, -0.14379354707665129),
    (-0.06245771575493557, -0.07639718586346110),
    (-0.07159593175777741, 0.00595536565276915),
    (-0.03167929390245019, 0.03856769526301793),
    (0.01890898565110766, 0.00760539424271147),
    (0.04926161137832240, -0.06411014430053390),
    (0.05768814623421683, -0.15068618173358578),
    (0.06144258297076708, -0.21200636329120301),
    (0.06348341960185613, -0.19620269813094307),
    (0.04877736350310589, -0.11864999881200111),
    (0.01010950997574472, -0.02630070679113791),
    (-0.02929178864801191, 0.04439260202207482),
    (-0.03484517126321562, 0.04508635396034735),
    (-0.00547176780437610, 0.00205637806941426),
    (0.02278296865283977, -0.00063732526427685),
    (0.02688982591366477, 0.05333738901586284),
    (0.01942012754957055, 0.10942832669749143),
    (0.01572585258756565, 0.11189204189054594),
    (0.01490550715016034, 0.04449822818925343),
    (0.01715683226376727, -0.06944648050933899),
    (0.02822659878011318, -0.17843652160132820),
    (0.03758307610456144, -0.21986013433664692),
    (0.03275008021608433, -0.15869878676112170),
    (0.01855749786752354, -0.02337224995718105),
    (0.00217095395782931, 0.10971764224593601),
    (-0.01851381451105007, 0.17214910008793413),
    (-0.04722574936345419, 0.14341588977845254),
    (-0.07151540514482006, 0.04684695724814321),
    (-0.06827195484995092, -0.07022207121861397),
    (-0.03290227240464227, -0.16328400808152735),
    (0.01043861198275382, -0.20184486126076279),
    (0.03236563559476477, -0.17125821306380920),
    (0.02040121529932702, -0.09103660189829657),
    (-0.00509649513318102, -0.01170360991547489),
    (-0.01388353426600228, 0.03588955538451771),
    (-0.00523671715033842, 0.07068798057534148),
    (0.00665852487721137, 0.11666210640054926),
    (0.01593540832939290, 0.15844892856402149),
    (0.02080509201836796, 0.17186274420065850),
];

/// Taps of the large combo model.
pub const LARGE_COMBO: [(f64, f64); 87] = [
    (1.31819680801404560, 0.00362521700518292),
    (1.37738284126127919, 0.14134596126256205),
    (1.09957637225311622, 0.33199581815501555),
    (0.62025358899656258, 0.37476042042088142),
    (0.12926194402137478, 0.24702655568406759),
    (-0.28927985011367602, 0.13289168298307708),
    (-0.56518146339033448, 0.11026641793526121),
    (-0.59843200696815069, 0.10139909232154271),
    (-0.45219971861789204, 0.13313355255903159),
    (-0.32520490032331351, 0.29009061730364216),
    (-0.29773131872442909, 0.45307495356996669),
    (-0.31738895975218867, 0.43198591958928922),
    (-0.33336150604703757, 0.24240412850274029),
    (-0.32461638442042151, 0.02779297492397464),
    (-0.27812829473787770, -0.15565718905032455),
    (-0.19413454458668097, -0.32087693535188599),
    (-0.12378036344480114, -0.37736575956794161),
    (-0.12550494837257106, -0.25593811142722300),
    (-0.17725736033713696, -0.07708896413593636),
    (-0.22023699647700670, 0.01600371273599124),
    (-0.21987645486953747, -0.00973336938352798),
    (-0.15014276479707978, -0.11602269600138954),
    (-0.05176520203073560, -0.20383164255692698),
    (-0.04276687165294867, -0.17785002166834518),
    (-0.15951546388137597, -0.06748854885822464),
    (-0.30211952144352616, 0.03440494237025149),
    (-0.36462803375134506, 0.05874284362202409),
    (-0.32283960219377539, -0.01189623197958362),
    (-0.19245178663350720, -0.11088858383712991),
    (0.00681589563349590, -0.16314250963457660),
    (0.20927798345622584, -0.16952981620487462),
    (0.25638846543430976, -0.11462562122281153),
    (0.04584495673888605, 0.04669671229804190),
    (-0.25221561978187662, 0.19250758741703761),
    (-0.35662801992424953, 0.12244680002787561),
    (-0.21498114329314663, -0.12152120956991189),
    (0.00968605571673376, -0.30597812512858558),
    (0.18029119870614621, -0.31569386468576782),
    (0.22744437185251629, -0.18028438460422197),
    (0.09725687638959078, 0.05479918522830433),
    (-0.17970389267353537, 0.29222750363124067),
    (-0.42371969704763018, 0.34924957781842314),
    (-0.43313266755788055, 0.11503731970288061),
    (-0.22178165627851801, -0.25002925550036226),
    (-0.00410198176852576, -0.43283281457037676),
    (0.09072426344812032, -0.35318250460706446),
    (0.08405839183965140, -0.16936391987143717),
    (-0.01110419756114383, 0.01247164991313877),
    (-0.18593334646855278, 0.14513260199423966),
    (-0.33665010871497486, 0.14456206192169668),
    (-0.32644968491439380, -0.01594380759082303),
    (-0.14855437679485431, -0.23555511219002742),
    (0.05113019250820622, -0.35556617126595202),
    (0.12915754942362243, -0.28571671825750300),
    (0.07406865846069306, -0.10543886479975995),
    (-0.03669573814193980, 0.03194267657582078),
    (-0.13429103278009327, 0.06145796486786051),
    (-0.17884021749974641, 0.00156626902982124),
    (-0.16138212225178239, -0.09402070836837134),
    (-0.10867028245257521, -0.15407963447815898),
    (-0.06312416389213464, -0.11241095544179526),
    (-0.05826376574081994, 0.03635253545701986),
    (-0.07991631148258237, 0.18041947557579863),
    (-0.07777397532506500, 0.20817156738202205),
    (-0.03812528734394271, 0.13679963125162486),
    (0.00204900323943951, 0.04009000730101046),
    (0.01779599498119764, -0.04218637577942354),
    (0.00950301949319113, -0.07908911305044238),
    (-0.04283600714814891, -0.02716262334097985),
    (-0.14478320837041933, 0.08823515277628832),
    (-0.23250267035795688, 0.15334197814956568),
    (-0.22369031446225857, 0.08550989980799503),
    (-0.11142757883989868, -0.08321482928259660),
    (0.02752318631713307, -0.25252906099212968),
    (0.11940028414727490, -0.34358127205009553),
    (0.12702057126698307, -0.31808560130583663),
    (0.03639067777025356, -0.17970282734717846),
    (-0.11389848143835518, -0.00470616711331971),
    (-0.23024072979374310, 0.09772245468884058),
    (-0.24389015061112601, 0.09600959885615798),
    (-0.16680269075295703, 0.05194978963662898),
    (-0.05108041495077725, 0.01796071525570735),
    (0.06489835353859555, -0.00808013770331126),
    (0.15481511440233464, -0.02674063848284838),
    (0.18620867857907253, -0.01786423699465214),
    (0.13879832139055756, 0.01584446839973597),
    (0.04878235109120615, 0.02962866516075816),
];

/// Taps of the small combo model.
pub const SMALL_COMBO: [(f64, f64); 82] = [
    (1.42133070619855229, -0.18270903813104500),
    (1.47209686171873821, -0.27954009590498585),
    (1.34648011331265294, -0.47178343556301960),
    (0.82133804036124580, -0.41060189990353935),
    (0.21628057120466901, -0.26062442734317454),
    (-0.30306716082877883, -0.10067648425439185),
    (-0.69484313178531876, 0.09655574841702286),
    (-0.88320822356980833, 0.26501644327144314),
    (-0.81326147029423723, 0.31115926837054075),
    (-0.56728759049069222, 0.23304233545561287),
    (-0.33340326645198737, 0.12361361388240180),
    (-0.20280263733605616, 0.03531960962500105),
    (-0.15864533788751345, -0.00355160825317868),
    (-0.12544767480555119, -0.01979010423176500),
    (-0.06666788902658917, -0.00188830739903378),
    (0.02977793355081072, 0.02304216615605394),
    (0.12821526330916558, 0.02636238376777800),
    (0.19933812710210136, -0.02932657234709721),
    (0.18346460191225772, -0.12859581955080629),
    (-0.00088697526755385, -0.15855257539277415),
    (-0.28904286712096761, -0.06226286786982616),
    (-0.49133546282552537, 0.06512851581813534),
    (-0.52908013030763046, 0.13606992188523465),
    (-0.45897241332311706, 0.15527194946346906),
    (-0.35535938629924352, 0.13634771941703441),
    (-0.26185269405237693, 0.08736651482771546),
    (-0.19997351944186473, 0.01714565029656306),
    (-0.18894054145105646, -0.04557612705740050),
    (-0.24043993691153928, -0.05267500387081067),
    (-0.29191852873822671, -0.01922151122971644),
    (-0.29399783430587761, 0.02238952856106585),
    (-0.26662219155294159, 0.07760819463416335),
    (-0.20881206667122221, 0.11930017354479640),
    (-0.12916658879944876, 0.11798638949823513),
    (-0.07678815166012012, 0.06826864734598684),
    (-0.08568505484529348, 0.00510459741104792),
    (-0.13613615872486634, -0.02288223583971244),
    (-0.17426657494209266, -0.02723737220296440),
    (-0.17343619261009030, -0.01412920547179825),
    (-0.14548368977428555, 0.02640418940455951),
    (-0.10485295885802372, 0.06334665781931498),
    (-0.06632268974717079, 0.05960343688612868),
    (-0.06915692039882040, 0.03541337869596061),
    (-0.11889611687783583, 0.02250608307287119),
    (-0.14598456370320673, -0.00280345943128246),
    (-0.12312084125613143, -0.04947283933434576),
    (-0.11379940289994711, -0.06590080966570636),
    (-0.12963290754003182, -0.02597647654256477),
    (-0.12723837402978638, 0.04942071966927938),
    (-0.09185015882996231, 0.10420810015956679),
    (-0.04011592913036545, 0.10234174227772008),
    (0.00992597785057113, 0.05674042373836896),
    (0.04921452178306781, -0.00222698867111080),
    (0.06096504883783566, -0.04040426549982253),
    (0.04113530718724200, -0.04190143593049960),
    (0.01292699017654650, -0.01121994018532499),
    (-0.00437123132431870, 0.02482497612289103),
    (-0.02090571264211918, 0.03732746039260295),
    (-0.04749751678612051, 0.02960060937328099),
    (-0.07675095194206227, 0.02241927084099648),
    (-0.08879414028581609, 0.01144281133042115),
    (-0.07378854974999530, -0.02518742701599147),
    (-0.04677309194488959, -0.08984657372223502),
    (-0.02911874044176449, -0.14202665940555093),
    (-0.02103564720234969, -0.14640411976171003),
    (-0.01940626429101940, -0.10867274382865903),
    (-0.03965401793931531, -0.04775225375522835),
    (-0.08102486457314527, 0.03204447425666343),
    (-0.11794849372825778, 0.12755667382696789),
    (-0.11946469076758266, 0.20151394599125422),
    (-0.07404630324668053, 0.21300634351769704),
    (-0.00477584437144086, 0.16864707684978708),
    (0.05924822014377220, 0.09394651445109450),
    (0.10060989907457370, 0.00419196431884887),
    (0.10817907203844988, -0.07459664480796091),
    (0.08701102204768002, -0.11129477437630560),
    (0.05673785623180162, -0.10638640242375266),
    (0.02944190197442081, -0.08499792583420167),
    (0.01570145445652971, -0.06190456843465320),
    (0.02770233032476748, -0.04573713136865480),
    (0.05417160459175360, -0.03965651064634598),
    (0.06080831637644498, -0.02909500789113911),
];

/// Taps of the bass amp model.
pub const BASS_AMP: [(f64, f64); 81] = [
    (1.35472031405494242, 0.00220914099195157),
    (1.63534207755253003, -0.11406232654509685),
    (1.82334575691525869, -0.42647194712964054),
    (1.86156386235405868, -0.76744187887586590),
    (1.67332739338852599, -0.95161997324293013),
    (1.25054130794899021, -0.98410433514572859),
    (0.70049121047281737, -0.87375612110718992),
    (0.15291791448081560, -0.61195266024519046),
    (-0.37301992914152693, -0.16755422915252094),
    (-0.76568539228498433, 0.28554435228965386),
    (-0.95726568749937369, 0.61659719162806048),
    (-1.01273552193911032, 0.81827288407943954),
    (-0.93920108117234447, 0.80077111864205874),
    (-0.79831898832953974, 0.65814750339694406),
    (-0.64200088100452313, 0.46135833001232618),
    (-0.48807302802822128, 0.15506178974799034),
    (-0.36545171501947982, -0.16126103769376721),
    (-0.31469581455759105, -0.32250870039053953),
    (-0.36893534817945800, -0.25409418897237473),
    (-0.41092557722975687, -0.13114730488878301),
    (-0.38584044480710594, -0.06825323739722661),
    (-0.33378434007178670, -0.04144255489164217),
    (-0.26144203061699706, -0.06031313105098152),
    (-0.25818342000920502, -0.03642289242586355),
    (-0.28096018498822661, -0.00976973667327174),
    (-0.25845682019095384, -0.02749015358080831),
    (-0.26655607865953096, 0.00329839675455690),
    (-0.30590085026938518, 0.07375043215328811),
    (-0.32875683916470899, 0.12454134857516502),
    (-0.38166643180506560, 0.19973911428609989),
    (-0.49068186937289598, 0.34785166842136384),
    (-0.60274753867622777, 0.48685038872711034),
    (-0.65944678627090636, 0.49844657885975518),
    (-0.64488955808717285, 0.40514406499806987),
    (-0.55818730353434354, 0.28029870614987346),
    (-0.43110859113387556, 0.15373504582939335),
    (-0.37726894966096269, 0.11570983506028532),
    (-0.39953242355200935, 0.17879231130484088),
    (-0.36726676379100875, 0.22013553023983223),
    (-0.27187029469227386, 0.18461171768478427),
    (-0.21109334552321635, 0.14497481318083569),
    (-0.19808797405293213, 0.14916579928186940),
    (-0.16287926785495671, 0.15146098461120627),
    (-0.11086621477163359, 0.13182973443924018),
    (-0.07531043236890560, 0.08062172796472888),
    (-0.01747364473230771, -0.02201865873632456),
    (0.03080279125662693, -0.08721756240972101),
    (0.02354148659185142, -0.06376361763053796),
    (-0.02835772372098715, -0.00589978513642627),
    (-0.08983370744565244, 0.02350960427706536),
    (-0.14148947620055380, 0.03329826628693369),
    (-0.17576502674572581, 0.06507546651241880),
    (-0.17168865666573860, 0.07734801128437317),
    (-0.14107027738292105, 0.03136459344220402),
    (-0.12287163395380074, -0.01933408169185258),
    (-0.12276622398112971, -0.01983508766241737),
    (-0.12349721440213673, 0.01111031415304768),
    (-0.08649454142716655, -0.02252815645513927),
    (-0.00953083685474757, -0.13778878548343007),
    (0.06045983158868478, -0.23966318224935096),
    (0.09053229817093242, -0.27190119941572544),
    (0.08112662178843048, -0.22456862606452327),
    (0.07503525686243730, -0.14330154410548213),
    (0.07372595404399729, -0.06185193766408734),
    (0.06073789200080433, 0.01261857435786178),
    (0.04616712695742254, 0.05851771967084609),
    (0.01036235510345900, 0.08286534414423796),
    (-0.03708389413229191, 0.06695282381039531),
    (-0.07092204876981217, 0.01915829199112784),
    (-0.09443579589460312, -0.01210082455316246),
    (-0.07824038577769601, -0.06121988546065113),
    (-0.00854730633079399, -0.14468518752295506),
    (0.06845589924191028, -0.18902431382592944),
    (0.10351569998375465, -0.13204443060279647),
    (0.10513368758532179, -0.02993199294485649),
    (0.08896978950235003, 0.04074499273825906),
    (0.03697537734050980, 0.09217751130846838),
    (-0.04014322441280276, 0.14062297149365666),
    (-0.10505934581398618, 0.16988861157275814),
    (-0.13937661651676272, 0.15083294570551492),
    (-0.13183458845108439, 0.06657454442471208),
];

/// Taps of the amp-simulator cabinet, modulated by their own delayed sample.
pub const AMP_CABINET: [(f64, f64); 84] = [
    (1.31698250313308396, -0.08140616497621633),
    (1.47229016949915326, -0.27680278993637253),
    (1.30410109086044956, -0.35629113432046489),
    (0.81766210474551260, -0.26808782337659753),
    (0.19868872545506663, -0.11105517193919669),
    (-0.39115909132567039, 0.12630622002682679),
    (-0.76881891559343574, 0.40879849500403143),
    (-0.87146861782680340, 0.59529560488000599),
    (-0.79504575932563670, 0.60877047551611796),
    (-0.61653017622406314, 0.47662851438557335),
    (-0.40718195794382067, 0.24955839378539713),
    (-0.31794900040616203, 0.04169792259600613),
    (-0.41075032540217843, -0.00368483996076280),
    (-0.56901352922170667, 0.11027360805893105),
    (-0.62443222391889264, 0.22198075154245228),
    (-0.53462856723129204, 0.22933544545324852),
    (-0.34441703361995046, 0.12956809502269492),
    (-0.13947052337867882, -0.00339775055962799),
    (0.03771252648928484, -0.10863931549251718),
    (0.18280210770271693, -0.17413646599296417),
    (0.24621986701761467, -0.14547053270435095),
    (0.22347075142737360, -0.02493869490104031),
    (0.14346348482123716, 0.11284054747963246),
    (0.00834364862916028, 0.24284684053733926),
    (-0.11559740296078347, 0.32623054435304538),
    (-0.18067604561283060, 0.32311481551122478),
    (-0.22927997789035612, 0.26991539052832925),
    (-0.28487666578669446, 0.22437227250279349),
    (-0.31992973037153838, 0.15289876100963865),
    (-0.35174606303520733, 0.05656293023086628),
    (-0.36894898011375254, -0.04333925421463558),
    (-0.32567576055307507, -0.14594589410921388),
    (-0.27440135050585784, -0.15529667398122521),
    (-0.21998973785078091, -0.05083553737157104),
    (-0.10323624876862457, 0.04651829594199963),
    (0.02091603687851074, 0.12000046818439322),
    (0.11344930914138468, 0.17697142512225839),
    (0.22766779627643968, 0.13645102964003858),
    (0.38378309953638229, -0.01997653307333791),
    (0.52789400804568076, -0.21409137428422448),
    (0.55444630296938280, -0.32331980931576626),
    (0.42333237669264601, -0.26855847463044280),
    (0.21942831522035078, -0.12051365248820624),
    (-0.00584169427830633, 0.03706970171280329),
    (-0.24279799124660351, 0.17296440491477982),
    (-0.40173760787507085, 0.21717989835163351),
    (-0.43930035724188155, 0.16425928481378199),
    (-0.41067765934041811, 0.10390115786636855),
    (-0.34409235547165967, 0.07268159377411920),
    (-0.26542883122568151, 0.05483457497365785),
    (-0.22024754776138800, 0.06484897950087598),
    (-0.20394367993632415, 0.08746309731952180),
    (-0.17565242431124092, 0.07611309538078760),
    (-0.10116623231246825, 0.00642818706295112),
    (-0.00782648272053632, -0.08004141267685004),
    (0.05059046006747323, -0.12436676387548490),
    (0.06241531553254467, -0.11530779547021434),
    (0.04952694587101836, -0.08340945324333944),
    (0.00843873294401687, -0.03279659052562903),
    (-0.05161338949440241, 0.03428181149163798),
    (-0.08165520146902012, 0.08196746092283110),
    (-0.06639532849935320, 0.09797462781896329),
    (-0.02953430910661621, 0.09175612938515763),
    (0.00741058547442938, 0.05442091048731967),
    (0.01832866125391727, 0.00306243693643687),
    (0.00526964230373573, -0.04364102661136410),
    (-0.00300984373848200, -0.09742737841278880),
    (-0.00413616769576694, -0.14380661694523073),
    (-0.00588769034931419, -0.16012843578892538),
    (-0.00688588239450581, -0.14074464279305798),
    (-0.02277307992926315, -0.07914752191801366),
    (-0.04627166091180877, 0.00192787268067208),
    (-0.05562045897455786, 0.05932868727665747),
    (-0.05134243784922165, 0.08245334798868090),
    (-0.04719409472239919, 0.07498680629253825),
    (-0.05889738914266415, 0.06116127018043697),
    (-0.09428363535111127, 0.06535868867863834),
    (-0.15181756953225126, 0.08982979655234427),
    (-0.20878969456036670, 0.10761070891499538),
    (-0.22647885581813790, 0.08462542510349125),
    (-0.19723482443646323, 0.02665160920736287),
    (-0.16441643451155163, -0.02314691954338197),
    (-0.15201914054931515, -0.04424903493886839),
    (-0.15454370641307855, -0.04223203797913008),
];
