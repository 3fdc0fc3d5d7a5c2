//! Builtin unit and prefix catalog
//!
//! To add a new unit, add an entry to the UNITS table. Its numerator and denominator list the
//! units it reduces to, and must eventually reach entries of BASE_UNITS.
//! Parsing, conversion and formatting pick new entries up automatically.

use std::f64::consts::PI;

/// Canonical name of the dimensionless unit
pub const UNITY: &str = "<1>";

/// Prefix metadata
pub struct PrefixDef {
    /// Canonical name, e.g. `<kilo>`
    pub name: &'static str,
    /// Accepted spellings; the first one is used for output
    pub aliases: &'static [&'static str],
    /// Multiplier applied to the unit that follows
    pub scalar: f64,
}

/// Unit metadata - single source of truth for each unit
pub struct UnitDef {
    /// Canonical name, e.g. `<meter>`
    pub name: &'static str,
    /// Physical kind, e.g. "length"
    pub kind: &'static str,
    /// Accepted spellings; the first one is used for output
    pub aliases: &'static [&'static str],
    /// Multiplier to reach the composition below
    pub scalar: f64,
    pub numerator: &'static [&'static str],
    pub denominator: &'static [&'static str],
}

const fn prefix(name: &'static str, aliases: &'static [&'static str], scalar: f64) -> PrefixDef {
    PrefixDef {
        name,
        aliases,
        scalar,
    }
}

const fn unit(
    name: &'static str,
    kind: &'static str,
    aliases: &'static [&'static str],
    scalar: f64,
    numerator: &'static [&'static str],
    denominator: &'static [&'static str],
) -> UnitDef {
    UnitDef {
        name,
        kind,
        aliases,
        scalar,
        numerator,
        denominator,
    }
}

const M: &str = "<meter>";
const KG: &str = "<kilogram>";
const S: &str = "<second>";
const A: &str = "<ampere>";
const MOL: &str = "<mole>";

const M3: &[&str] = &[M, M, M];
const SPEED: (&[&str], &[&str]) = (&[M], &[S]);
const PRESSURE: (&[&str], &[&str]) = (&[KG], &[M, S, S]);
const ENERGY: (&[&str], &[&str]) = (&[M, M, KG], &[S, S]);
const FORCE: (&[&str], &[&str]) = (&[KG, M], &[S, S]);
const POWER: (&[&str], &[&str]) = (&[KG, M, M], &[S, S, S]);
const MAGNETIC_FLUX: (&[&str], &[&str]) = (&[M, M, KG], &[S, S, A]);
const FLUX_DENSITY: (&[&str], &[&str]) = (&[KG], &[S, S, A]);

/// Units every other unit reduces to
pub static BASE_UNITS: &[&str] = &[
    "<meter>",
    "<kilogram>",
    "<second>",
    "<mole>",
    "<ampere>",
    "<radian>",
    "<kelvin>",
    "<temp-K>",
    "<byte>",
    "<dollar>",
    "<candela>",
    "<each>",
    "<steradian>",
    "<decibel>",
];

pub static PREFIXES: &[PrefixDef] = &[
    prefix("<googol>", &["googol"], 1e100),
    prefix("<kibi>", &["Ki", "Kibi", "kibi"], 1024.0),
    prefix("<mebi>", &["Mi", "Mebi", "mebi"], 1_048_576.0),
    prefix("<gibi>", &["Gi", "Gibi", "gibi"], 1_073_741_824.0),
    prefix("<tebi>", &["Ti", "Tebi", "tebi"], 1_099_511_627_776.0),
    prefix("<pebi>", &["Pi", "Pebi", "pebi"], 1_125_899_906_842_624.0),
    prefix("<exi>", &["Ei", "Exi", "exi"], 1_152_921_504_606_846_976.0),
    prefix("<zebi>", &["Zi", "Zebi", "zebi"], 1_180_591_620_717_411_303_424.0),
    prefix("<yebi>", &["Yi", "Yebi", "yebi"], 1_208_925_819_614_629_174_706_176.0),
    prefix("<yotta>", &["Y", "Yotta", "yotta"], 1e24),
    prefix("<zetta>", &["Z", "Zetta", "zetta"], 1e21),
    prefix("<exa>", &["E", "Exa", "exa"], 1e18),
    prefix("<peta>", &["P", "Peta", "peta"], 1e15),
    prefix("<tera>", &["T", "Tera", "tera"], 1e12),
    prefix("<giga>", &["G", "Giga", "giga"], 1e9),
    prefix("<mega>", &["M", "Mega", "mega"], 1e6),
    prefix("<kilo>", &["k", "kilo"], 1e3),
    prefix("<hecto>", &["h", "Hecto", "hecto"], 1e2),
    prefix("<deca>", &["da", "Deca", "deca", "Deka", "deka"], 1e1),
    prefix("<deci>", &["d", "Deci", "deci"], 1e-1),
    prefix("<centi>", &["c", "Centi", "centi"], 1e-2),
    prefix("<milli>", &["m", "Milli", "milli"], 1e-3),
    prefix("<micro>", &["µ", "μ", "u", "Micro", "micro"], 1e-6),
    prefix("<nano>", &["n", "Nano", "nano"], 1e-9),
    prefix("<pico>", &["p", "Pico", "pico"], 1e-12),
    prefix("<femto>", &["f", "Femto", "femto"], 1e-15),
    prefix("<atto>", &["a", "Atto", "atto"], 1e-18),
    prefix("<zepto>", &["z", "Zepto", "zepto"], 1e-21),
    prefix("<yocto>", &["y", "Yocto", "yocto"], 1e-24),
];

pub static UNITS: &[UnitDef] = &[
    unit(UNITY, "", &["1", "<1>"], 1.0, &[], &[]),
    // length
    unit(M, "length", &["m", "meter", "meters", "metre", "metres"], 1.0, &[M], &[]),
    unit("<inch>", "length", &["in", "inch", "inches", "\""], 0.0254, &[M], &[]),
    unit("<foot>", "length", &["ft", "foot", "feet", "'"], 0.3048, &[M], &[]),
    unit("<yard>", "length", &["yd", "yard", "yards"], 0.9144, &[M], &[]),
    unit("<mile>", "length", &["mi", "mile", "miles"], 1609.344, &[M], &[]),
    unit("<naut-mile>", "length", &["nmi", "naut-mile"], 1852.0, &[M], &[]),
    unit("<league>", "length", &["league", "leagues"], 4828.0, &[M], &[]),
    unit("<furlong>", "length", &["furlong", "furlongs"], 201.2, &[M], &[]),
    unit("<rod>", "length", &["rd", "rod", "rods"], 5.029, &[M], &[]),
    unit("<mil>", "length", &["mil", "mils"], 0.0000254, &[M], &[]),
    unit("<angstrom>", "length", &["ang", "angstrom", "angstroms"], 1e-10, &[M], &[]),
    unit("<fathom>", "length", &["fathom", "fathoms"], 1.829, &[M], &[]),
    unit("<pica>", "length", &["pica", "picas"], 0.00423333333, &[M], &[]),
    unit("<point>", "length", &["point", "points"], 0.000352777778, &[M], &[]),
    unit("<redshift>", "length", &["z", "red-shift", "redshift"], 1.302773e26, &[M], &[]),
    unit("<AU>", "length", &["AU", "astronomical-unit"], 149_597_900_000.0, &[M], &[]),
    unit("<light-second>", "length", &["ls", "light-second"], 299_792_500.0, &[M], &[]),
    unit("<light-minute>", "length", &["lmin", "light-minute"], 17_987_550_000.0, &[M], &[]),
    unit("<light-year>", "length", &["ly", "light-year"], 9_460_528_000_000_000.0, &[M], &[]),
    unit("<parsec>", "length", &["pc", "parsec", "parsecs"], 30_856_780_000_000_000.0, &[M], &[]),
    unit("<datamile>", "length", &["DM", "datamile"], 1828.8, &[M], &[]),
    // mass
    unit(KG, "mass", &["kg", "kilogram", "kilograms"], 1.0, &[KG], &[]),
    unit("<AMU>", "mass", &["u", "AMU", "amu"], 1.660538921e-27, &[KG], &[]),
    unit("<dalton>", "mass", &["Da", "Dalton", "Daltons", "dalton", "daltons"], 1.660538921e-27, &[KG], &[]),
    unit("<slug>", "mass", &["slug", "slugs"], 14.5939029, &[KG], &[]),
    unit("<short-ton>", "mass", &["tn", "ton", "short-ton"], 907.18474, &[KG], &[]),
    unit("<metric-ton>", "mass", &["t", "tonne", "metric-ton"], 1000.0, &[KG], &[]),
    unit("<carat>", "mass", &["ct", "carat", "carats"], 0.0002, &[KG], &[]),
    unit("<pound>", "mass", &["lbs", "lb", "pound", "pounds", "#"], 0.45359237, &[KG], &[]),
    unit("<ounce>", "mass", &["oz", "ounce", "ounces"], 0.0283495231, &[KG], &[]),
    unit("<gram>", "mass", &["g", "gram", "grams", "gramme", "grammes"], 1e-3, &[KG], &[]),
    unit("<grain>", "mass", &["grain", "grains", "gr"], 6.479891e-5, &[KG], &[]),
    unit("<dram>", "mass", &["dram", "drams", "dr"], 0.0017718452, &[KG], &[]),
    unit("<stone>", "mass", &["stone", "stones", "st"], 6.35029318, &[KG], &[]),
    // area
    unit("<hectare>", "area", &["hectare"], 10000.0, &[M, M], &[]),
    unit("<acre>", "area", &["acre", "acres"], 4046.85642, &[M, M], &[]),
    unit("<sqft>", "area", &["sqft"], 1.0, &["<foot>", "<foot>"], &[]),
    // volume
    unit("<liter>", "volume", &["l", "L", "liter", "liters", "litre", "litres"], 0.001, M3, &[]),
    unit("<gallon>", "volume", &["gal", "gallon", "gallons"], 0.0037854118, M3, &[]),
    unit("<gallon-imp>", "volume", &["galimp", "gallon-imp", "gallons-imp"], 0.0045460900, M3, &[]),
    unit("<quart>", "volume", &["qt", "quart", "quarts"], 0.00094635295, M3, &[]),
    unit("<pint>", "volume", &["pt", "pint", "pints"], 0.000473176475, M3, &[]),
    unit("<pint-imp>", "volume", &["ptimp", "pint-imp", "pints-imp"], 5.6826125e-4, M3, &[]),
    unit("<cup>", "volume", &["cu", "cup", "cups"], 0.000236588238, M3, &[]),
    unit("<fluid-ounce>", "volume", &["floz", "fluid-ounce", "fluid-ounces"], 2.95735297e-5, M3, &[]),
    unit("<fluid-ounce-imp>", "volume", &["flozimp", "floz-imp", "fluid-ounce-imp", "fluid-ounces-imp"], 2.84130625e-5, M3, &[]),
    unit("<tablespoon>", "volume", &["tb", "tbsp", "tbs", "tablespoon", "tablespoons"], 1.47867648e-5, M3, &[]),
    unit("<teaspoon>", "volume", &["tsp", "teaspoon", "teaspoons"], 4.92892161e-6, M3, &[]),
    unit("<bushel>", "volume", &["bu", "bsh", "bushel", "bushels"], 0.035239072, M3, &[]),
    unit("<oilbarrel>", "volume", &["bbl", "oilbarrel", "oilbarrels", "oil-barrel", "oil-barrels"], 0.158987294928, M3, &[]),
    unit("<beerbarrel>", "volume", &["bl", "bl-us", "beerbarrel", "beerbarrels", "beer-barrel", "beer-barrels"], 0.1173477658, M3, &[]),
    unit("<beerbarrel-imp>", "volume", &["blimp", "bl-imp", "beerbarrel-imp", "beerbarrels-imp", "beer-barrel-imp", "beer-barrels-imp"], 0.16365924, M3, &[]),
    // speed
    unit("<kph>", "speed", &["kph"], 0.277777778, SPEED.0, SPEED.1),
    unit("<mph>", "speed", &["mph"], 0.44704, SPEED.0, SPEED.1),
    unit("<knot>", "speed", &["kt", "kn", "kts", "knot", "knots"], 0.514444444, SPEED.0, SPEED.1),
    unit("<fps>", "speed", &["fps"], 0.3048, SPEED.0, SPEED.1),
    // acceleration
    unit("<gee>", "acceleration", &["gee"], 9.80665, &[M], &[S, S]),
    unit("<Gal>", "acceleration", &["Gal"], 1e-2, &[M], &[S, S]),
    // temperature differences
    unit("<kelvin>", "temperature", &["degK", "kelvin"], 1.0, &["<kelvin>"], &[]),
    unit("<celsius>", "temperature", &["degC", "celsius", "centigrade"], 1.0, &["<kelvin>"], &[]),
    unit("<fahrenheit>", "temperature", &["degF", "fahrenheit"], 5.0 / 9.0, &["<kelvin>"], &[]),
    unit("<rankine>", "temperature", &["degR", "rankine"], 5.0 / 9.0, &["<kelvin>"], &[]),
    // absolute temperatures
    unit("<temp-K>", "temperature", &["tempK", "temp-K"], 1.0, &["<temp-K>"], &[]),
    unit("<temp-C>", "temperature", &["tempC", "temp-C"], 1.0, &["<temp-K>"], &[]),
    unit("<temp-F>", "temperature", &["tempF", "temp-F"], 5.0 / 9.0, &["<temp-K>"], &[]),
    unit("<temp-R>", "temperature", &["tempR", "temp-R"], 5.0 / 9.0, &["<temp-K>"], &[]),
    // time
    unit(S, "time", &["s", "sec", "secs", "second", "seconds"], 1.0, &[S], &[]),
    unit("<minute>", "time", &["min", "mins", "minute", "minutes"], 60.0, &[S], &[]),
    unit("<hour>", "time", &["h", "hr", "hrs", "hour", "hours"], 3600.0, &[S], &[]),
    unit("<day>", "time", &["d", "day", "days"], 86400.0, &[S], &[]),
    unit("<week>", "time", &["wk", "week", "weeks"], 604_800.0, &[S], &[]),
    unit("<fortnight>", "time", &["fortnight", "fortnights"], 1_209_600.0, &[S], &[]),
    unit("<year>", "time", &["y", "yr", "year", "years", "annum"], 31_556_926.0, &[S], &[]),
    unit("<decade>", "time", &["decade", "decades"], 315_569_260.0, &[S], &[]),
    unit("<century>", "time", &["century", "centuries"], 3_155_692_600.0, &[S], &[]),
    // pressure
    unit("<pascal>", "pressure", &["Pa", "pascal", "Pascal"], 1.0, PRESSURE.0, PRESSURE.1),
    unit("<bar>", "pressure", &["bar", "bars"], 100_000.0, PRESSURE.0, PRESSURE.1),
    unit("<mmHg>", "pressure", &["mmHg"], 133.322368, PRESSURE.0, PRESSURE.1),
    unit("<inHg>", "pressure", &["inHg"], 3386.3881472, PRESSURE.0, PRESSURE.1),
    unit("<torr>", "pressure", &["torr"], 133.322368, PRESSURE.0, PRESSURE.1),
    unit("<atm>", "pressure", &["atm", "ATM", "atmosphere", "atmospheres"], 101_325.0, PRESSURE.0, PRESSURE.1),
    unit("<psi>", "pressure", &["psi"], 6894.76, PRESSURE.0, PRESSURE.1),
    unit("<cmh2o>", "pressure", &["cmH2O", "cmh2o"], 98.0638, PRESSURE.0, PRESSURE.1),
    unit("<inh2o>", "pressure", &["inH2O", "inh2o"], 249.082052, PRESSURE.0, PRESSURE.1),
    // viscosity
    unit("<poise>", "viscosity", &["P", "poise"], 0.1, &[KG], &[M, S]),
    unit("<stokes>", "viscosity", &["St", "stokes"], 1e-4, &[M, M], &[S]),
    // substance
    unit(MOL, "substance", &["mol", "mole"], 1.0, &[MOL], &[]),
    // concentration
    unit("<molar>", "molar_concentration", &["M", "molar"], 1000.0, &[MOL], M3),
    unit("<wtpercent>", "molar_concentration", &["wt%", "wtpercent"], 10.0, &[KG], M3),
    // activity
    unit("<katal>", "activity", &["kat", "katal", "Katal"], 1.0, &[MOL], &[S]),
    unit("<unit>", "activity", &["U", "enzUnit", "unit"], 16.667e-16, &[MOL], &[S]),
    // electricity
    unit(A, "current", &["A", "Ampere", "ampere", "amp", "amps"], 1.0, &[A], &[]),
    unit("<farad>", "capacitance", &["F", "farad", "Farad"], 1.0, &[S, S, S, S, A, A], &[M, M, KG]),
    unit("<coulomb>", "charge", &["C", "coulomb", "Coulomb"], 1.0, &[A, S], &[]),
    unit("<Ah>", "charge", &["Ah"], 3600.0, &[A, S], &[]),
    unit("<elementary-charge>", "charge", &["e"], 1.602176634e-19, &[A, S], &[]),
    unit("<siemens>", "conductance", &["S", "Siemens", "siemens"], 1.0, &[S, S, S, A, A], &[KG, M, M]),
    unit("<henry>", "inductance", &["H", "Henry", "henry"], 1.0, &[M, M, KG], &[S, S, A, A]),
    unit("<volt>", "potential", &["V", "Volt", "volt", "volts"], 1.0, &[M, M, KG], &[S, S, S, A]),
    // U+2126 is the ohm sign, U+03A9 the greek capital omega
    unit("<ohm>", "resistance", &["\u{2126}", "\u{03A9}", "Ohm", "ohm"], 1.0, &[M, M, KG], &[S, S, S, A, A]),
    // magnetism
    unit("<weber>", "magnetism", &["Wb", "weber", "webers"], 1.0, MAGNETIC_FLUX.0, MAGNETIC_FLUX.1),
    unit("<tesla>", "magnetism", &["T", "tesla", "teslas"], 1.0, FLUX_DENSITY.0, FLUX_DENSITY.1),
    unit("<gauss>", "magnetism", &["G", "gauss"], 1e-4, FLUX_DENSITY.0, FLUX_DENSITY.1),
    unit("<maxwell>", "magnetism", &["Mx", "maxwell", "maxwells"], 1e-8, MAGNETIC_FLUX.0, MAGNETIC_FLUX.1),
    unit("<oersted>", "magnetism", &["Oe", "oersted", "oersteds"], 250.0 / PI, &[A], &[M]),
    // energy
    unit("<joule>", "energy", &["J", "joule", "Joule", "joules", "Joules"], 1.0, ENERGY.0, ENERGY.1),
    unit("<erg>", "energy", &["erg", "ergs"], 1e-7, ENERGY.0, ENERGY.1),
    unit("<btu>", "energy", &["BTU", "btu", "BTUs"], 1055.056, ENERGY.0, ENERGY.1),
    unit("<calorie>", "energy", &["cal", "calorie", "calories"], 4.184, ENERGY.0, ENERGY.1),
    unit("<Calorie>", "energy", &["Cal", "Calorie", "Calories"], 4184.0, ENERGY.0, ENERGY.1),
    unit("<therm-US>", "energy", &["th", "therm", "therms", "Therm", "therm-US"], 105_480_400.0, ENERGY.0, ENERGY.1),
    unit("<Wh>", "energy", &["Wh"], 3600.0, ENERGY.0, ENERGY.1),
    unit("<electronvolt>", "energy", &["eV", "electronvolt", "electronvolts"], 1.602176634e-19, ENERGY.0, ENERGY.1),
    // force
    unit("<newton>", "force", &["N", "Newton", "newton"], 1.0, FORCE.0, FORCE.1),
    unit("<dyne>", "force", &["dyn", "dyne"], 1e-5, FORCE.0, FORCE.1),
    unit("<pound-force>", "force", &["lbf", "pound-force"], 4.448222, FORCE.0, FORCE.1),
    unit("<kilogram-force>", "force", &["kgf", "kilogram-force", "kilopond", "kp"], 9.80665, FORCE.0, FORCE.1),
    unit("<gram-force>", "force", &["gf", "gram-force"], 9.80665e-3, FORCE.0, FORCE.1),
    // frequency
    unit("<hertz>", "frequency", &["Hz", "hertz", "Hertz"], 1.0, &[UNITY], &[S]),
    // angle
    unit("<radian>", "angle", &["rad", "radian", "radians"], 1.0, &["<radian>"], &[]),
    unit("<degree>", "angle", &["deg", "degree", "degrees"], PI / 180.0, &["<radian>"], &[]),
    unit("<arcminute>", "angle", &["arcmin", "arcminute", "arcminutes"], PI / 10800.0, &["<radian>"], &[]),
    unit("<arcsecond>", "angle", &["arcsec", "arcsecond", "arcseconds"], PI / 648_000.0, &["<radian>"], &[]),
    unit("<gradian>", "angle", &["gon", "grad", "gradian", "grads"], PI / 200.0, &["<radian>"], &[]),
    unit("<steradian>", "solid_angle", &["sr", "steradian", "steradians"], 1.0, &["<steradian>"], &[]),
    // rotation
    unit("<rotation>", "angle", &["rotation"], 2.0 * PI, &["<radian>"], &[]),
    unit("<rpm>", "angular_velocity", &["rpm"], 2.0 * PI / 60.0, &["<radian>"], &[S]),
    // information
    unit("<byte>", "information", &["B", "byte", "bytes"], 1.0, &["<byte>"], &[]),
    unit("<bit>", "information", &["b", "bit", "bits"], 0.125, &["<byte>"], &[]),
    unit("<Bps>", "information_rate", &["Bps"], 1.0, &["<byte>"], &[S]),
    unit("<bps>", "information_rate", &["bps"], 0.125, &["<byte>"], &[S]),
    // currency
    unit("<dollar>", "currency", &["USD", "dollar"], 1.0, &["<dollar>"], &[]),
    unit("<cents>", "currency", &["cents"], 0.01, &["<dollar>"], &[]),
    // luminosity
    unit("<candela>", "luminosity", &["cd", "candela"], 1.0, &["<candela>"], &[]),
    unit("<lumen>", "luminous_power", &["lm", "lumen"], 1.0, &["<candela>", "<steradian>"], &[]),
    unit("<lux>", "illuminance", &["lux"], 1.0, &["<candela>", "<steradian>"], &[M, M]),
    // power
    unit("<watt>", "power", &["W", "watt", "watts"], 1.0, POWER.0, POWER.1),
    unit("<volt-ampere>", "power", &["VA", "volt-ampere"], 1.0, POWER.0, POWER.1),
    unit("<volt-ampere-reactive>", "power", &["var", "Var", "VAr", "VAR", "volt-ampere-reactive"], 1.0, POWER.0, POWER.1),
    unit("<horsepower>", "power", &["hp", "horsepower"], 745.699872, POWER.0, POWER.1),
    // radiation
    unit("<gray>", "radiation", &["Gy", "gray", "grays"], 1.0, &[M, M], &[S, S]),
    unit("<roentgen>", "radiation", &["R", "roentgen"], 0.009330, &[M, M], &[S, S]),
    unit("<sievert>", "radiation", &["Sv", "sievert", "sieverts"], 1.0, &[M, M], &[S, S]),
    unit("<becquerel>", "radiation", &["Bq", "becquerel", "becquerels"], 1.0, &[UNITY], &[S]),
    unit("<curie>", "radiation", &["Ci", "curie", "curies"], 3.7e10, &[UNITY], &[S]),
    // rate
    unit("<cpm>", "rate", &["cpm"], 1.0 / 60.0, &["<count>"], &[S]),
    unit("<dpm>", "rate", &["dpm"], 1.0 / 60.0, &["<count>"], &[S]),
    unit("<bpm>", "rate", &["bpm"], 1.0 / 60.0, &["<count>"], &[S]),
    // resolution and typography
    unit("<dot>", "resolution", &["dot", "dots"], 1.0, &["<each>"], &[]),
    unit("<pixel>", "resolution", &["pixel", "px"], 1.0, &["<each>"], &[]),
    unit("<ppi>", "resolution", &["ppi"], 1.0, &["<pixel>"], &["<inch>"]),
    unit("<dpi>", "typography", &["dpi"], 1.0, &["<dot>"], &["<inch>"]),
    // counting
    unit("<cell>", "counting", &["cells", "cell"], 1.0, &["<each>"], &[]),
    unit("<each>", "counting", &["each"], 1.0, &["<each>"], &[]),
    unit("<count>", "counting", &["count"], 1.0, &["<each>"], &[]),
    unit("<base-pair>", "counting", &["bp", "base-pair"], 1.0, &["<each>"], &[]),
    unit("<nucleotide>", "counting", &["nt", "nucleotide"], 1.0, &["<each>"], &[]),
    unit("<molecule>", "counting", &["molecule", "molecules"], 1.0, &[UNITY], &[]),
    // prefix-like multipliers
    unit("<dozen>", "prefix_only", &["doz", "dz", "dozen"], 12.0, &["<each>"], &[]),
    unit("<percent>", "prefix_only", &["%", "percent"], 0.01, &[UNITY], &[]),
    unit("<ppm>", "prefix_only", &["ppm"], 1e-6, &[UNITY], &[]),
    unit("<ppb>", "prefix_only", &["ppb"], 1e-9, &[UNITY], &[]),
    unit("<ppt>", "prefix_only", &["ppt"], 1e-12, &[UNITY], &[]),
    unit("<ppq>", "prefix_only", &["ppq"], 1e-15, &[UNITY], &[]),
    unit("<gross>", "prefix_only", &["gross"], 1.0, &["<dozen>", "<dozen>"], &[]),
    // logarithmic
    unit("<decibel>", "logarithmic", &["dB", "decibel", "decibels"], 1.0, &["<decibel>"], &[]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_unit_aliases_unique() {
        let mut seen = HashSet::new();
        for def in UNITS {
            for alias in def.aliases {
                assert!(seen.insert(*alias), "duplicate unit alias {alias}");
            }
        }
    }

    #[test]
    fn test_base_units_defined() {
        for base in BASE_UNITS {
            let def = UNITS.iter().find(|d| d.name == *base);
            assert!(def.is_some(), "base unit {base} has no definition");
            assert_eq!(def.unwrap().numerator, &[*base]);
        }
    }

    #[test]
    fn test_all_units_have_aliases() {
        for def in UNITS {
            assert!(!def.aliases.is_empty(), "{} has no aliases", def.name);
            assert!(def.scalar.is_finite() && def.scalar != 0.0);
        }
        for def in PREFIXES {
            assert!(!def.aliases.is_empty(), "{} has no aliases", def.name);
        }
    }
}
