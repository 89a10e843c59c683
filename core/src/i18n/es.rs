//! Spanish narration

pub(crate) const MESSAGES: &[(&str, &str)] = &[
    // Sorting
    ("sort.compare", "Comparar {a} y {b}"),
    ("sort.swap", "Intercambiar {a} y {b}"),
    ("sort.in_place", "{value} ya está en su posición final (índice {index})"),
    ("sort.done", "Ordenado: {array}"),
    ("bubble.start", "Inicio del ordenamiento burbuja sobre {array}"),
    ("bubble.early_exit", "No hubo intercambios en esta pasada, el arreglo ya está ordenado"),
    ("selection.start", "Inicio del ordenamiento por selección sobre {array}"),
    ("selection.assume_min", "Suponer que {value} en el índice {index} es el mínimo"),
    ("selection.new_min", "Nuevo mínimo {value} en el índice {index}"),
    ("selection.no_swap", "{value} ya es el mínimo, no hace falta intercambiar"),
    ("insertion.start", "Inicio del ordenamiento por inserción sobre {array}"),
    ("insertion.pick_key", "Tomar la clave {key} del índice {index}"),
    ("insertion.compare", "Comparar {value} con la clave {key}"),
    ("insertion.shift", "Desplazar {value} del índice {from} al {to}"),
    ("insertion.insert", "Insertar la clave {key} en el índice {index}"),
    ("quick.start", "Inicio del ordenamiento rápido sobre {array}"),
    ("quick.single", "El elemento único {value} en el índice {index} ya está en su lugar"),
    ("quick.range", "Particionar los índices {low} a {high}"),
    ("quick.pivot", "Elegir el último elemento {pivot} como pivote"),
    ("quick.compare", "¿Es {value} menor que el pivote {pivot}?"),
    ("quick.stays", "{value} no es menor que el pivote, se queda a la derecha"),
    ("quick.place_pivot", "Colocar el pivote {pivot} en el índice {index}"),
    ("merge.start", "Inicio del ordenamiento por mezcla sobre {array}"),
    ("merge.split", "Dividir los índices {left}..{right} en {mid}"),
    ("merge.copy_runs", "Mezclar las secuencias {left} y {right}"),
    ("merge.take_left", "Tomar {value} de la secuencia izquierda hacia el índice {k}"),
    ("merge.take_right", "Tomar {value} de la secuencia derecha hacia el índice {k}"),
    ("merge.copy_rest", "Copiar el restante {value} al índice {k}"),
    ("heap.start", "Inicio del ordenamiento por montículo sobre {array}"),
    ("heap.compare_child", "Comparar el hijo {child} con el mayor hasta ahora, {largest}"),
    ("heap.build", "Reordenar el subárbol con raíz en el índice {index} ({value})"),
    ("heap.extract", "Mover el máximo {value} al índice {index}"),
    ("counting.start", "El máximo es {max}, reservar {size} contadores"),
    ("counting.tally", "Contar {value}: visto {count} vez/veces"),
    ("counting.prefix", "Total acumulado hasta {value}: {total}"),
    ("counting.place", "Colocar {value} en el índice de salida {index}"),
    ("radix.start", "El máximo es {max}, una pasada por dígito"),
    ("radix.pass", "Distribuir según el dígito de valor posicional {exp}"),
    ("radix.digit", "{value} va a la cubeta {digit}"),
    ("radix.collect", "Recoger las cubetas en orden: {array}"),
    ("shell.start", "Inicio del ordenamiento Shell sobre {array} con salto {gap}"),
    ("shell.pick", "Guardar {value} del índice {index} (salto {gap})"),
    ("shell.compare", "Comparar {value} con el valor guardado {temp}"),
    ("shell.shift", "Desplazar {value} del índice {from} al {to}"),
    ("shell.insert", "Dejar {value} en el índice {index}"),
    ("shell.gap", "Reducir el salto a la mitad: {gap}"),
    // Searching
    ("search.start", "Buscar {target} en {array}"),
    ("search.compare", "Comparar {value} del índice {index} con {target}"),
    ("search.found", "Se encontró {target} en el índice {index}"),
    ("search.not_found", "{target} no está en el arreglo"),
    ("binary.start", "Búsqueda binaria de {target} en {array}"),
    ("binary.mid", "Rango {low}..{high}: el índice medio {mid} contiene {value}"),
    ("binary.go_right", "{value} < {target}, descartar la mitad izquierda"),
    ("binary.go_left", "{value} > {target}, descartar la mitad derecha"),
    ("jump.start", "Búsqueda por saltos de {target} en {array} con bloques de {block}"),
    ("jump.probe", "Revisar el final del bloque en el índice {index}: {value} frente a {target}"),
    ("jump.jump", "Demasiado pequeño, saltar: el bloque empieza en {prev}, siguiente sondeo en {step}"),
    ("interpolation.start", "Búsqueda por interpolación de {target} en {array}"),
    ("interpolation.probe", "La posición estimada {pos} contiene {value}"),
    // Graphs
    ("bfs.start", "Iniciar BFS en {node}"),
    ("bfs.dequeue", "Sacar {node} de la cola; la cola queda {queue}"),
    ("bfs.done", "Orden BFS: {order}"),
    ("graph.already_seen", "{node} ya fue descubierto"),
    ("graph.discover", "Descubrir {to} desde {from}"),
    ("dfs.start", "Iniciar DFS en {node}"),
    ("dfs.pop", "Desapilar {node}; la pila queda {stack}"),
    ("dfs.skip", "{node} ya fue visitado, se omite"),
    ("dfs.visit", "Visitar {node}"),
    ("dfs.push", "Apilar el vecino {node}"),
    ("dfs.done", "Orden DFS: {order}"),
    ("dijkstra.start", "La distancia a {source} es 0, los demás nodos empiezan en ∞"),
    ("dijkstra.stale", "Omitir la entrada obsoleta {node} ({dist})"),
    ("dijkstra.pop", "Tomar {node}, el nodo pendiente más cercano, a distancia {dist}"),
    ("dijkstra.finalize", "La distancia a {node} es definitiva: {dist}"),
    ("dijkstra.finalized", "{node} ya es definitivo, no se relaja"),
    ("dijkstra.relax", "Camino más corto hacia {to}: {old} → {new}"),
    ("dijkstra.keep", "Mantener {to} en {current}; {candidate} no es más corto"),
    ("dijkstra.done", "Se conocen todas las distancias mínimas desde {source}"),
    ("prim.start", "Hacer crecer el árbol desde {node}; {count} nodos por conectar"),
    ("prim.pop", "Arista candidata más barata: {from}-{to} ({weight})"),
    ("prim.skip", "{node} ya está en el árbol, se omite"),
    ("prim.add", "Agregar {from}-{to} ({weight}); peso total {total}"),
    ("prim.push", "Nueva arista candidata {from}-{to} ({weight})"),
    ("prim.done", "Árbol de expansión mínima completo, peso total {total}"),
    ("topo.degrees", "Grados de entrada: {degrees}"),
    ("topo.sources", "Nodos sin prerrequisitos: {nodes}"),
    ("topo.output", "Emitir {node}"),
    ("topo.decrement", "Quitar la arista hacia {node}; su grado de entrada es ahora {degree}"),
    ("topo.enqueue", "{node} ya no tiene prerrequisitos, se encola"),
    ("topo.cycle", "Solo se emitieron {count} de {total} nodos: el grafo tiene un ciclo"),
    ("topo.done", "Orden topológico: {order}"),
    // Dynamic programming
    ("fib.alloc", "Reservar una tabla de {size} celdas para fib({n})"),
    ("fib.base", "Caso base: dp[{index}] = {value}"),
    ("fib.fill", "dp[{index}] = {a} + {b} = {value}"),
    ("fib.done", "fib({n}) = {value}"),
    ("knapsack.start", "{items} objetos, capacidad {capacity}"),
    ("knapsack.too_heavy", "El peso {weight} supera la capacidad {capacity}, se copia {value}"),
    ("knapsack.take", "Tomar el objeto da {take}, más que {skip}"),
    ("knapsack.leave", "Tomar el objeto da {take}, no mejora {skip}"),
    ("knapsack.done", "Mejor valor con capacidad {capacity}: {value}"),
    ("lcs.start", "Subsecuencia común más larga de \"{a}\" y \"{b}\""),
    ("lcs.match", "Ambos son {ch}: diagonal + 1 = {value}"),
    ("lcs.no_match", "{a} ≠ {b}: tomar el vecino mayor, {value}"),
    ("lcs.traceback", "Recorrer la tabla hacia atrás: \"{sequence}\""),
    ("lcs.done", "La longitud de la LCS es {length}"),
    // Backtracking
    ("queens.start", "Colocar {n} reinas sin que se ataquen"),
    ("queens.solved", "Las {n} reinas están colocadas"),
    ("queens.conflict", "({row}, {col}) está atacada por la reina en ({qrow}, {qcol})"),
    ("queens.safe", "({row}, {col}) es segura"),
    ("queens.place", "Colocar una reina en ({row}, {col})"),
    ("queens.remove", "Retroceder: quitar la reina de ({row}, {col})"),
    ("queens.exhausted", "Ninguna columna sirve en la fila {row}, retroceder"),
    ("sudoku.start", "Resolver el tablero: {empty} celdas vacías"),
    ("sudoku.solved", "Todas las celdas están llenas: resuelto"),
    ("sudoku.conflict", "{digit} no puede ir en ({row}, {col}): choca con ({crow}, {ccol})"),
    ("sudoku.valid", "{digit} cabe en ({row}, {col})"),
    ("sudoku.place", "Escribir {digit} en ({row}, {col})"),
    ("sudoku.undo", "Retroceder: borrar {digit} de ({row}, {col})"),
    ("sudoku.dead_end", "Ningún dígito cabe en ({row}, {col}), retroceder"),
    ("maze.start", "Buscar el camino más corto de {start} a {goal}"),
    ("maze.dequeue", "Expandir {cell} a distancia {dist}"),
    ("maze.goal", "Se llegó a la meta a distancia {dist}"),
    ("maze.enqueue", "Descubrir {cell} a distancia {dist}"),
    ("maze.no_path", "La meta no es alcanzable"),
    ("maze.path", "Seguir los padres hacia atrás: {moves} movimientos"),
    ("maze.done", "Camino más corto encontrado con {moves} movimientos"),
    // Divide and conquer
    ("hanoi.start", "Mover {disks} discos de {from} a {to}"),
    ("hanoi.move", "Movimiento {count}: disco {disk} de {from} a {to}"),
    ("hanoi.done", "Terminado en {moves} movimientos"),
    // Concepts
    ("big_o.start", "¿Cómo crece el trabajo cuando n va de 1 a {max}?"),
    ("big_o.constant", "Constante: {ops} operación con n = {n}"),
    ("big_o.logarithmic", "Logarítmica: unas {ops} divisiones a la mitad con n = {n}"),
    ("big_o.linear", "Lineal: {ops} operaciones con n = {n}"),
    ("big_o.linearithmic", "Linealítmica: {ops} operaciones con n = {n}"),
    ("big_o.quadratic", "Cuadrática: {ops} operaciones con n = {n}"),
    ("big_o.exponential", "Exponencial: {ops} operaciones con n = {n}"),
    ("big_o.marker", "Comparar todas las clases con n = {n}"),
    ("big_o.done", "La diferencia crece rápido: la tasa de crecimiento importa más que las constantes"),
    ("recursion.call", "Llamar a factorial({n}), profundidad {depth}"),
    ("recursion.base", "Caso base: factorial({n}) = 1"),
    ("recursion.return", "factorial({n}) = {n} × {inner} = {result}"),
    ("recursion.done", "factorial({n}) = {result}"),
    ("two_pointers.start", "Encontrar dos valores en {array} que sumen {target}"),
    ("two_pointers.sum", "{a} + {b} = {sum}"),
    ("two_pointers.found", "{a} + {b} alcanza el objetivo (índices {left} y {right})"),
    ("two_pointers.move_left", "{sum} < {target}: mover el puntero izquierdo a la derecha"),
    ("two_pointers.move_right", "{sum} > {target}: mover el puntero derecho a la izquierda"),
    ("two_pointers.none", "Ningún par suma {target}"),
    ("window.first", "Primera ventana de tamaño {k}: {array}, suma {sum}"),
    ("window.best_init", "Mejor hasta ahora: {sum}"),
    ("window.slide", "Deslizar: sumar {added}, quitar {removed}, suma {sum}"),
    ("window.new_best", "Nuevo mejor {sum} desde el índice {start}"),
    ("window.done", "Suma máxima de ventana {sum}, desde el índice {start}"),
    ("memo.call", "Llamar a fib({n})"),
    ("memo.hit", "fib({n}) ya está en la memoria: {value}"),
    ("memo.base", "Caso base fib({n})"),
    ("memo.store", "Guardar fib({n}) = {value}"),
    ("memo.done", "fib({n}) = {value} con {calls} llamadas y {hits} aciertos en memoria"),
    ("coins.start", "Formar {amount} con las monedas {coins}"),
    ("coins.take", "La estrategia voraz toma {coin}, quedan {remaining}"),
    ("coins.too_big", "{coin} es mayor que lo que queda, {remaining}"),
    ("coins.greedy_done", "La estrategia voraz eligió {picked}: {count} monedas"),
    ("coins.dp_init", "Tabla DP para montos de 0 a {amount}: dp[0] = 0"),
    ("coins.dp_improve", "dp[{a}] mejora a {value} usando la moneda {coin}"),
    ("coins.dp_keep", "La moneda {coin} no mejora dp[{a}] = {value}"),
    ("coins.compare", "La estrategia voraz usó {greedy} monedas, el óptimo es {dp}"),
    // Data structures
    ("sq.start", "Insertar {values} en una pila y en una cola"),
    ("sq.push", "Apilar {value} en la cima de la pila"),
    ("sq.enqueue", "Encolar {value} al final de la cola"),
    ("sq.pop", "Desapilar {value}: sale primero el más reciente"),
    ("sq.dequeue", "Desencolar {value}: sale primero el más antiguo"),
    ("sq.done", "Pila {stack}, cola {queue}"),
    ("list.append", "Agregar {value} al final"),
    ("list.walk", "Visitar el nodo {value}, buscando {target}"),
    ("list.insert", "Enlazar un nodo nuevo {value} después de {after}"),
    ("list.found", "Se encontró {value} en la posición {index}"),
    ("list.missing", "{value} no está en la lista"),
    ("list.unlink", "Desenlazar el nodo {value}"),
    ("list.done", "La lista queda {list}"),
    ("hash.start", "Tabla vacía con {buckets} cubetas"),
    ("hash.hash", "Hash de \"{key}\": suma de caracteres {code}, cubeta {bucket}"),
    ("hash.put", "Guardar \"{key}\" = {value} en la cubeta {bucket}"),
    ("hash.collision", "Colisión: \"{key}\" se une a la cubeta {bucket}, cadena de {count}"),
    ("hash.lookup", "Buscar \"{key}\" en la cubeta {bucket}"),
    ("hash.compare", "\"{candidate}\" no es \"{key}\", seguir buscando"),
    ("hash.found", "Se encontró \"{key}\" = {value}"),
    ("hash.missing", "\"{key}\" no está en la cubeta {bucket}"),
    ("hash.done", "{count} entradas en {buckets} cubetas"),
    ("bst.root", "{value} se convierte en la raíz"),
    ("bst.go_left", "{value} < {node}: ir a la izquierda"),
    ("bst.go_right", "{value} ≥ {node}: ir a la derecha"),
    ("bst.place", "Lugar vacío: colocar {value} aquí"),
    ("bst.found", "Se encontró {value}"),
    ("bst.missing", "Se llegó a un subárbol vacío: {value} no está en el árbol"),
    ("bst.done", "Recorrido en orden: {values}"),
    ("minheap.append", "Agregar {value} en el índice {index}"),
    ("minheap.compare", "El hijo {child} es menor que su padre {parent}"),
    ("minheap.swap", "Intercambiar: {child} sube por encima de {parent}"),
    ("minheap.settled", "{value} no es menor que su padre {parent}, parar"),
    ("minheap.extract", "Quitar el mínimo {min}; mover el último elemento {last} a la raíz"),
    ("minheap.sift", "Comparar {value} con su hijo menor {child}"),
    ("minheap.swap_down", "Intercambiar: {value} baja por debajo de {child}"),
    ("minheap.return", "Devolver el mínimo {min}"),
    ("minheap.done", "Arreglo del montículo: {array}"),
    // About paragraphs
    ("about.big-o", "La notación O grande describe cómo crece el trabajo de un algoritmo con el tamaño de la entrada. El crecimiento constante y logarítmico se mantiene casi plano, el lineal y el linealítmico crecen de forma estable, y el cuadrático o exponencial se vuelve impracticable muy pronto."),
    ("about.recursion", "Una función recursiva resuelve un problema llamándose a sí misma con una versión más pequeña. Cada llamada espera en la pila hasta que el caso base devuelve un valor y luego los resultados suben."),
    ("about.two-pointers", "En un arreglo ordenado, dos índices que avanzan uno hacia el otro encuentran un par con una suma dada en tiempo lineal: una suma pequeña mueve el puntero izquierdo y una grande el derecho."),
    ("about.sliding-window", "Una ventana deslizante mantiene un acumulado sobre un rango de tamaño fijo. Al moverla se suma un elemento y se quita otro, así que cada ventana cuesta tiempo constante."),
    ("about.memoization", "La memorización guarda el resultado de cada subproblema la primera vez que se calcula. Las llamadas repetidas se vuelven consultas y el Fibonacci ingenuo exponencial pasa a ser lineal."),
    ("about.greedy-vs-dp", "Un algoritmo voraz elige lo mejor en cada paso; la programación dinámica considera todos los subproblemas. Con monedas de 1, 3 y 4, la estrategia voraz paga 6 con tres monedas y la tabla DP encuentra dos."),
    ("about.stack-queue", "Una pila saca primero el último elemento agregado (LIFO); una cola saca primero el más antiguo (FIFO). Ambas agregan y quitan en tiempo constante."),
    ("about.linked-list", "Una lista enlazada guarda los elementos en nodos que apuntan al siguiente. Insertar o quitar después de un nodo conocido cuesta tiempo constante, pero encontrar un nodo exige recorrer desde la cabeza."),
    ("about.hash-table", "Una tabla hash asigna cada clave a una cubeta mediante una función hash. Las claves que caen en la misma cubeta se encadenan y una búsqueda solo recorre esa cadena."),
    ("about.binary-search-tree", "En un árbol binario de búsqueda cada nodo es mayor que su subárbol izquierdo y no mayor que el derecho, así que insertar y buscar siguen un único camino de la raíz a una hoja."),
    ("about.binary-heap", "Un montículo mínimo binario es un árbol completo guardado en un arreglo donde cada padre es menor o igual que sus hijos. Los valores nuevos suben y al extraer el mínimo el último valor baja."),
    ("about.bubble-sort", "El ordenamiento burbuja intercambia repetidamente pares adyacentes desordenados. Tras cada pasada el mayor valor restante llega al final; una pasada sin intercambios termina antes."),
    ("about.selection-sort", "El ordenamiento por selección busca el mínimo de la parte desordenada y lo lleva a la siguiente posición. Siempre hace O(n²) comparaciones pero como mucho n - 1 intercambios."),
    ("about.insertion-sort", "El ordenamiento por inserción amplía un prefijo ordenado insertando cada clave en su lugar y desplazando los valores mayores a la derecha. Es rápido con entradas casi ordenadas."),
    ("about.quick-sort", "El ordenamiento rápido particiona el arreglo alrededor de un pivote para que los valores menores queden a su izquierda y luego ordena ambos lados recursivamente. En promedio es O(n log n)."),
    ("about.merge-sort", "El ordenamiento por mezcla divide el arreglo a la mitad, ordena cada mitad y las mezcla. Es estable y siempre O(n log n), a costa de memoria adicional."),
    ("about.heap-sort", "El ordenamiento por montículo construye un montículo máximo en el propio arreglo y luego mueve repetidamente el máximo al final y restaura el montículo. Es O(n log n) sin memoria adicional."),
    ("about.counting-sort", "El ordenamiento por conteo cuenta cuántas veces aparece cada valor, convierte los conteos en posiciones con un total acumulado y coloca cada elemento directamente. Cuesta O(n + k) para valores hasta k."),
    ("about.radix-sort", "El ordenamiento radix ordena los números dígito a dígito, empezando por el menos significativo, con una pasada estable por cubetas para cada dígito."),
    ("about.shell-sort", "El ordenamiento Shell aplica inserción sobre elementos separados por un salto y reduce el salto hasta 1, moviendo rápido los valores muy desubicados."),
    ("about.linear-search", "La búsqueda lineal revisa cada elemento en orden hasta encontrar el objetivo. Funciona con cualquier arreglo y cuesta O(n)."),
    ("about.binary-search", "La búsqueda binaria divide a la mitad un rango ordenado comparando el objetivo con el elemento central, y lo encuentra en O(log n)."),
    ("about.jump-search", "La búsqueda por saltos avanza en bloques de √n sobre un arreglo ordenado y luego recorre linealmente el bloque que puede contener el objetivo."),
    ("about.interpolation-search", "La búsqueda por interpolación estima dónde debería estar el objetivo a partir de los valores en los extremos del rango. Con datos uniformes necesita muy pocos sondeos."),
    ("about.bfs", "La búsqueda en anchura explora un grafo nivel por nivel con una cola, visitando todos los nodos a distancia d antes que cualquiera a distancia d + 1."),
    ("about.dfs", "La búsqueda en profundidad sigue una rama lo más lejos posible antes de retroceder. Esta versión usa una pila explícita."),
    ("about.dijkstra", "El algoritmo de Dijkstra encuentra los caminos más cortos desde un origen en un grafo con pesos no negativos, fijando siempre a continuación el nodo pendiente más cercano."),
    ("about.prim", "El algoritmo de Prim hace crecer un árbol de expansión mínima desde un nodo, agregando siempre la arista más barata que conecta un nodo nuevo."),
    ("about.topological-sort", "El algoritmo de Kahn ordena los nodos de un grafo dirigido acíclico para que cada arista apunte hacia delante, emitiendo repetidamente un nodo sin prerrequisitos pendientes."),
    ("about.fibonacci", "La tabulación calcula Fibonacci de abajo hacia arriba: cada celda es la suma de las dos anteriores, así que fib(n) requiere n sumas."),
    ("about.knapsack", "La tabla de la mochila 0/1 guarda el mejor valor para cada prefijo de objetos y cada capacidad. Cada celda elige entre dejar el objeto o tomarlo."),
    ("about.lcs", "La tabla de la subsecuencia común más larga compara cada par de prefijos. Los caracteres iguales extienden la diagonal; si no, la celda toma el mejor vecino. Un recorrido inverso recupera la subsecuencia."),
    ("about.n-queens", "El problema de las N reinas coloca N reinas en un tablero de N×N sin que dos compartan fila, columna o diagonal. El retroceso quita la última reina cuando una fila no tiene casilla segura."),
    ("about.sudoku", "El solucionador llena las celdas vacías una a una con el primer dígito válido para su fila, columna y caja, y lo borra cuando una celda posterior se queda sin opciones."),
    ("about.maze", "La búsqueda en anchura sobre una cuadrícula encuentra la ruta más corta en un laberinto. Cada celda recuerda desde dónde se llegó, así que el camino se reconstruye desde la meta."),
    ("about.tower-of-hanoi", "Para mover n discos se apartan n - 1 discos, se mueve el disco mayor y luego se colocan encima los n - 1 discos. Esto requiere 2ⁿ - 1 movimientos."),
];
